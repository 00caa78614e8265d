//! Heritage Run entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use js_sys::Reflect;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Document, Element, Event, HtmlCanvasElement, KeyboardEvent, Window};

    use heritage_run::Session;
    use heritage_run::content::{QuizOutcome, RevealOutcome};
    use heritage_run::notify::Notifications;
    use heritage_run::platform::{LocalStorage, now_ms};
    use heritage_run::renderer::CanvasSurface;

    /// Game instance holding all state
    struct Game {
        session: Session<LocalStorage>,
        surface: Option<CanvasSurface>,
    }

    impl Game {
        /// Simulate and draw one animation frame
        fn frame(&mut self, now: f64) -> bool {
            let changed = self.session.frame(now);
            if let Some(surface) = self.surface.as_mut() {
                self.session.draw(surface);
            }
            changed
        }
    }

    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    const SHARE_TITLE: &str = "Femmes Pionnières du Gaming";
    /// Attribute carrying the notification id on each close button
    const DISMISS_ATTR: &str = "data-dismiss";

    /// Everything registered with the browser for one mounted game
    struct Mounted {
        game: Rc<RefCell<Game>>,
        window: Window,
        document: Document,
        frame_id: Rc<Cell<Option<i32>>>,
        torn_down: Rc<Cell<bool>>,
        frame_cb: FrameCallback,
        keydown_cb: Closure<dyn FnMut(KeyboardEvent)>,
        keyup_cb: Closure<dyn FnMut(KeyboardEvent)>,
        blur_cb: Closure<dyn FnMut(Event)>,
        visibility_cb: Closure<dyn FnMut(Event)>,
        /// Toast container and its delegated close-button listener
        dismiss: Option<(Element, Closure<dyn FnMut(Event)>)>,
    }

    impl Mounted {
        fn teardown(self) {
            self.torn_down.set(true);
            if let Some(id) = self.frame_id.take() {
                let _ = self.window.cancel_animation_frame(id);
            }
            let _ = self.window.remove_event_listener_with_callback(
                "keydown",
                self.keydown_cb.as_ref().unchecked_ref(),
            );
            let _ = self.window.remove_event_listener_with_callback(
                "keyup",
                self.keyup_cb.as_ref().unchecked_ref(),
            );
            let _ = self
                .window
                .remove_event_listener_with_callback("blur", self.blur_cb.as_ref().unchecked_ref());
            let _ = self.document.remove_event_listener_with_callback(
                "visibilitychange",
                self.visibility_cb.as_ref().unchecked_ref(),
            );
            if let Some((container, cb)) = &self.dismiss {
                let _ = container
                    .remove_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
            }
            // Breaks the closure's self-reference
            self.frame_cb.borrow_mut().take();
            log::info!("Game torn down");
        }
    }

    thread_local! {
        static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Heritage Run starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let surface = document
            .get_element_by_id("game-canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .and_then(|canvas| CanvasSurface::from_canvas(&canvas));
        if surface.is_none() {
            log::warn!("No 2D canvas found; the game will run without drawing");
        }

        let seed = js_sys::Date::now() as u64;
        let session = Session::new(seed, LocalStorage::new());
        log::info!(
            "Game initialized with seed: {} (level {})",
            seed,
            session.progress().level()
        );
        let game = Rc::new(RefCell::new(Game { session, surface }));
        update_progress_panel(&document, &game.borrow().session);

        let keydown_cb = {
            let game = game.clone();
            Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let prevent = game.borrow_mut().session.key_down(&event.key(), now_ms());
                if prevent {
                    event.prevent_default();
                }
            })
        };
        let keyup_cb = {
            let game = game.clone();
            Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().session.key_up(&event.key());
            })
        };
        let blur_cb = {
            let game = game.clone();
            Closure::<dyn FnMut(_)>::new(move |_event: Event| {
                game.borrow_mut().session.blur();
            })
        };
        let visibility_cb = {
            let game = game.clone();
            let document = document.clone();
            Closure::<dyn FnMut(_)>::new(move |_event: Event| {
                if document.visibility_state() == web_sys::VisibilityState::Hidden {
                    game.borrow_mut().session.blur();
                    log::debug!("Page hidden, keys released");
                }
            })
        };

        let _ =
            window.add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref());
        let _ = window.add_event_listener_with_callback("keyup", keyup_cb.as_ref().unchecked_ref());
        let _ = window.add_event_listener_with_callback("blur", blur_cb.as_ref().unchecked_ref());
        let _ = document.add_event_listener_with_callback(
            "visibilitychange",
            visibility_cb.as_ref().unchecked_ref(),
        );
        let dismiss = document.get_element_by_id("notifications").map(|container| {
            let cb = dismiss_listener(game.clone(), document.clone());
            let _ =
                container.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
            (container, cb)
        });

        let frame_id = Rc::new(Cell::new(None));
        let torn_down = Rc::new(Cell::new(false));
        let frame_cb = start_loop(
            game.clone(),
            window.clone(),
            document.clone(),
            frame_id.clone(),
            torn_down.clone(),
        );

        MOUNTED.with(|m| {
            let previous = m.borrow_mut().replace(Mounted {
                game,
                window,
                document,
                frame_id,
                torn_down,
                frame_cb,
                keydown_cb,
                keyup_cb,
                blur_cb,
                visibility_cb,
                dismiss,
            });
            if let Some(previous) = previous {
                previous.teardown();
            }
        });

        log::info!("Heritage Run running!");
    }

    /// Cancel the pending frame and detach every listener
    pub fn teardown() {
        if let Some(mounted) = MOUNTED.with(|m| m.borrow_mut().take()) {
            mounted.teardown();
        }
    }

    fn start_loop(
        game: Rc<RefCell<Game>>,
        window: Window,
        document: Document,
        frame_id: Rc<Cell<Option<i32>>>,
        torn_down: Rc<Cell<bool>>,
    ) -> FrameCallback {
        let frame_cb: FrameCallback = Rc::new(RefCell::new(None));
        let frame_cb_loop = frame_cb.clone();
        let window_loop = window.clone();
        let frame_id_loop = frame_id.clone();

        *frame_cb.borrow_mut() = Some(Closure::new(move |_time: f64| {
            frame_id_loop.set(None);
            if torn_down.get() {
                return;
            }

            let changed = game.borrow_mut().frame(now_ms());
            {
                let g = game.borrow();
                if changed {
                    render_notifications(&document, g.session.notifications());
                }
                update_progress_panel(&document, &g.session);
            }

            if let Some(cb) = frame_cb_loop.borrow().as_ref() {
                match window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => frame_id_loop.set(Some(id)),
                    Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
                }
            }
        }));

        if let Some(cb) = frame_cb.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                frame_id.set(Some(id));
            }
        }
        frame_cb
    }

    /// Run `f` against the mounted game, if any
    fn with_game<R>(f: impl FnOnce(&mut Game) -> R) -> Option<R> {
        let game = MOUNTED.with(|m| m.borrow().as_ref().map(|m| m.game.clone()))?;
        let mut game = game.try_borrow_mut().ok()?;
        Some(f(&mut game))
    }

    pub fn reset_progress() {
        with_game(|game| game.session.reset_progress());
    }

    pub fn answer_quiz(question: usize, option: usize) -> Option<QuizOutcome> {
        with_game(|game| game.session.answer_quiz(question, option)).flatten()
    }

    pub fn select_timeline(index: usize) -> Option<RevealOutcome> {
        with_game(|game| game.session.select_timeline(index)).flatten()
    }

    pub fn reveal_pioneer(index: usize) -> Option<RevealOutcome> {
        with_game(|game| game.session.reveal_pioneer(index)).flatten()
    }

    /// Offer the progress summary to the share sheet, else the clipboard,
    /// else a plain alert
    pub fn share_progress() {
        let Some(text) = with_game(|game| game.session.share_text()) else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            let navigator = window.navigator();
            let share = Reflect::get(&navigator, &JsValue::from_str("share"))
                .ok()
                .and_then(|f| f.dyn_into::<js_sys::Function>().ok());

            if let Some(share) = share {
                let data = js_sys::Object::new();
                let _ = Reflect::set(&data, &"title".into(), &SHARE_TITLE.into());
                let _ = Reflect::set(&data, &"text".into(), &text.as_str().into());
                if let Ok(href) = window.location().href() {
                    let _ = Reflect::set(&data, &"url".into(), &href.into());
                }
                match share.call1(&navigator, &data) {
                    Ok(promise) => {
                        // Rejected when the user closes the sheet
                        let promise = promise.unchecked_into::<js_sys::Promise>();
                        if let Err(e) = JsFuture::from(promise).await {
                            log::debug!("Share dismissed: {:?}", e);
                        }
                    }
                    Err(e) => log::warn!("Share failed: {:?}", e),
                }
                return;
            }

            match JsFuture::from(navigator.clipboard().write_text(&text)).await {
                Ok(_) => {
                    with_game(|game| game.session.notify_copied(now_ms()));
                }
                Err(e) => {
                    log::warn!("Clipboard unavailable: {:?}", e);
                    let _ = window.alert_with_message(&text);
                }
            }
        });
    }

    /// Click on a toast's close button
    fn dismiss_listener(
        game: Rc<RefCell<Game>>,
        document: Document,
    ) -> Closure<dyn FnMut(Event)> {
        Closure::new(move |event: Event| {
            let id = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(&format!("[{}]", DISMISS_ATTR)).ok().flatten())
                .and_then(|button| button.get_attribute(DISMISS_ATTR))
                .and_then(|id| id.parse::<u32>().ok());
            let Some(id) = id else {
                return;
            };
            let Ok(mut game) = game.try_borrow_mut() else {
                return;
            };
            game.session.dismiss_notification(id);
            render_notifications(&document, game.session.notifications());
        })
    }

    /// Rebuild the toast container from the active notifications
    fn render_notifications(document: &Document, notifications: &Notifications) {
        let Some(container) = document.get_element_by_id("notifications") else {
            return;
        };
        container.set_inner_html("");
        for n in notifications.active() {
            let Ok(el) = document.create_element("div") else {
                continue;
            };
            el.set_class_name(&format!("notification {}", n.kind.css_class()));
            el.set_text_content(Some(&format!("{} {}", n.kind.icon(), n.message)));
            if let Ok(close) = document.create_element("button") {
                close.set_class_name("notification-close");
                close.set_text_content(Some("×"));
                let _ = close.set_attribute("aria-label", "Fermer");
                let _ = close.set_attribute(DISMISS_ATTR, &n.id.to_string());
                let _ = el.append_child(&close);
            }
            let _ = container.append_child(&el);
        }
    }

    /// Score, discovery and level counters in the page header
    fn update_progress_panel(document: &Document, session: &Session<LocalStorage>) {
        let snapshot = session.progress().snapshot();
        for (id, value) in [
            ("total-score", snapshot.total_score.to_string()),
            ("discoveries", snapshot.discoveries.to_string()),
            ("level", snapshot.level.to_string()),
            ("completion", format!("{}%", snapshot.completion_percent())),
        ] {
            if let Some(el) = document.get_element_by_id(id) {
                if el.text_content().as_deref() != Some(value.as_str()) {
                    el.set_text_content(Some(&value));
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Stop the game loop and remove its listeners (page navigation)
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn teardown() {
    wasm_game::teardown();
}

/// Zero the saved score and discoveries (header reset button)
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn reset_progress() {
    wasm_game::reset_progress();
}

/// Share the progress summary, falling back to the clipboard
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn share_progress() {
    wasm_game::share_progress();
}

/// Answer a quiz question. Returns `{ correct, correctOption, points,
/// explanation }`, or `undefined` when the answer was not accepted.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn answer_quiz(question: usize, option: usize) -> JsValue {
    let Some(outcome) = wasm_game::answer_quiz(question, option) else {
        return JsValue::UNDEFINED;
    };
    let result = js_sys::Object::new();
    for (key, value) in [
        ("correct", JsValue::from_bool(outcome.correct)),
        ("correctOption", JsValue::from(outcome.correct_option as u32)),
        ("points", JsValue::from(outcome.points as f64)),
        ("explanation", JsValue::from_str(outcome.explanation)),
    ] {
        let _ = js_sys::Reflect::set(&result, &key.into(), &value);
    }
    result.into()
}

/// Click on a timeline year: `"revealed"`, `"expanded"` or `"collapsed"`
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn select_timeline(index: usize) -> Option<String> {
    wasm_game::select_timeline(index).map(|o| o.label().to_string())
}

/// Click on a pioneer card: `"revealed"`, `"expanded"` or `"collapsed"`
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn reveal_pioneer(index: usize) -> Option<String> {
    wasm_game::reveal_pioneer(index).map(|o| o.label().to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Heritage Run (native) starting...");
    log::info!("Native mode has no canvas - build for wasm32 to play in the browser");

    println!("\nRunning headless session...");
    headless_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one scripted minute: start, then hop once a second
#[cfg(not(target_arch = "wasm32"))]
fn headless_session() {
    use heritage_run::Session;
    use heritage_run::content::{QuizOutcome, RevealOutcome};
    use heritage_run::platform::MemoryStore;
    use heritage_run::renderer::DisplayList;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    let mut session = Session::new(2024, MemoryStore::new());
    let mut now = 0.0;
    session.key_down("Enter", now);

    for frame in 0..3600u32 {
        if frame % 60 == 30 {
            session.key_down(" ", now);
        }
        session.frame(now);
        now += FRAME_MS;
        if session.state().run.game_over {
            log::info!("Game over after {} frames", frame + 1);
            break;
        }
    }

    let mut list = DisplayList::default();
    session.draw(&mut list);

    let state = session.state();
    let progress = session.progress().snapshot();
    println!(
        "✓ score {} | health {} | progress {} pts, {} discoveries, level {} | {} draw calls",
        state.run.score,
        state.health,
        progress.total_score,
        progress.discoveries,
        progress.level,
        list.len()
    );
}
