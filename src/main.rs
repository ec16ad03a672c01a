//! Heart Garden entry point
//!
//! In the browser this wires the page controls to the scenes. Natively it
//! runs every scene headless against a recording surface and logs what
//! happened, which is handy for tuning settings without a browser.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, Element, Event, HtmlButtonElement, HtmlCanvasElement, HtmlInputElement,
        MouseEvent, TouchEvent, Window,
    };

    use heart_garden::Settings;
    use heart_garden::consts::*;
    use heart_garden::content;
    use heart_garden::platform::dom;
    use heart_garden::platform::{CanvasSurface, SceneRunner, SharedRunner};
    use heart_garden::sim::gate::remaining_text;
    use heart_garden::sim::puzzle::PUZZLE_SEQUENCE;
    use heart_garden::sim::{
        Cascade, Fireworks, Garden, GateOutcome, HeartField, HeartPuzzle, LoginGate, Panorama,
        PressOutcome, Typewriter,
    };

    // Per-scene seed salts
    const BACKGROUND_SALT: u64 = 1;
    const FIREWORKS_SALT: u64 = 2;
    const GARDEN_SALT: u64 = 3;
    const CASCADE_SALT: u64 = 4;

    /// setTimeout may fire slightly before performance.now() reaches the due time
    const TIMER_SLACK_MS: f64 = 4.0;
    /// Re-poll interval when the completion timer fired too early
    const COMPLETION_RETRY_MS: i32 = 20;

    /// Everything the page handlers share
    struct App {
        settings: Settings,
        background: Option<SharedRunner<HeartField>>,
        fireworks: Option<SharedRunner<Fireworks>>,
        garden: Option<SharedRunner<Garden>>,
        panorama: Option<SharedRunner<Panorama>>,
        cascade: Option<SharedRunner<Cascade>>,
        gate: LoginGate,
        puzzle: HeartPuzzle,
    }

    impl App {
        fn rng(&self, salt: u64) -> Pcg32 {
            Pcg32::seed_from_u64(self.settings.seed_for(js_sys::Date::now() as u64, salt))
        }
    }

    thread_local! {
        static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    }

    /// Borrow the app state; handlers must not re-enter while the borrow is held
    fn with_app<T>(f: impl FnOnce(&mut App) -> T) -> Option<T> {
        APP.with(|app| app.borrow_mut().as_mut().map(f))
    }

    fn stop_runner<S: heart_garden::sim::Scene + 'static>(runner: &Option<SharedRunner<S>>) {
        if let Some(runner) = runner {
            runner.borrow_mut().stop();
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Heart Garden starting...");

        let (window, document) =
            dom::window_document().ok_or_else(|| JsValue::from_str("no window"))?;

        let settings = Settings::load();
        log::info!("Loaded settings: {:?}", settings);

        APP.with(|app| {
            *app.borrow_mut() = Some(App {
                settings,
                background: None,
                fireworks: None,
                garden: None,
                panorama: None,
                cascade: None,
                gate: LoginGate::default(),
                puzzle: HeartPuzzle::new(),
            });
        });

        start_background(&window, &document)?;
        wire_resize(&window);
        wire_login_form(&document);
        init_puzzle(&document);
        wire_modal_dismiss(&window);

        log::info!("Heart Garden running!");
        Ok(())
    }

    // =========================================================================
    // Scenes
    // =========================================================================

    fn start_background(window: &Window, document: &Document) -> Result<(), JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_id("bgCanvas");
        let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
        body.insert_before(&canvas, body.first_child().as_ref())?;

        let surface = CanvasSurface::from_canvas(canvas)?;
        let size = dom::viewport_size(window);
        surface.set_size(size);

        with_app(|app| {
            let scene = HeartField::with_rng(size, app.settings.background_hearts, app.rng(BACKGROUND_SALT));
            let runner = SceneRunner::new(scene, surface, window.clone());
            runner.borrow_mut().start();
            app.background = Some(runner);
        });
        Ok(())
    }

    fn start_fireworks() {
        let Some((window, document)) = dom::window_document() else {
            return;
        };
        let Some(surface) = CanvasSurface::by_id(&document, "fireworksCanvas") else {
            log::debug!("No fireworks canvas on this page");
            return;
        };
        let size = dom::viewport_size(&window);

        with_app(|app| {
            let policy = app.settings.burst_policy();
            let rng = app.rng(FIREWORKS_SALT);
            let runner = app
                .fireworks
                .get_or_insert_with(|| {
                    SceneRunner::new(Fireworks::with_rng(size, policy, rng), surface, window.clone())
                })
                .clone();
            let mut runner = runner.borrow_mut();
            runner.resize(size);
            runner.start();
        });
    }

    fn start_panorama() {
        let Some((window, document)) = dom::window_document() else {
            return;
        };
        let Some(surface) = CanvasSurface::by_id(&document, "panoramaCanvas") else {
            log::debug!("No panorama canvas on this page");
            return;
        };
        let size = Vec2::new(surface.canvas().offset_width() as f32, PANORAMA_HEIGHT);

        let runner = with_app(|app| {
            if let Some(runner) = &app.panorama {
                return runner.clone();
            }
            let scene = Panorama::with_sensitivity(size.x, app.settings.drag_sensitivity);
            let runner = SceneRunner::new(scene, surface, window.clone());
            wire_drag(&runner);
            app.panorama = Some(runner.clone());
            runner
        });

        if let Some(runner) = runner {
            let mut runner = runner.borrow_mut();
            runner.resize(size);
            runner.start();
            runner.redraw();
        }
    }

    fn start_garden() {
        let Some((window, document)) = dom::window_document() else {
            return;
        };
        let Some(surface) = CanvasSurface::by_id(&document, "flowerCanvas") else {
            log::debug!("No flower canvas on this page");
            return;
        };
        let size = Vec2::splat(GARDEN_SIZE);
        hide_poem(&document);

        with_app(|app| {
            let sizes = app.settings.garden_sizes();
            let rng = app.rng(GARDEN_SALT);
            let runner = app
                .garden
                .get_or_insert_with(|| {
                    let mut garden = Garden::with_rng(size, sizes, rng);
                    garden.set_on_bloom_complete(show_poem);
                    SceneRunner::new(garden, surface, window.clone())
                })
                .clone();
            let mut runner = runner.borrow_mut();
            runner.resize(size);
            runner.start();
        });
    }

    fn start_cascade() {
        let Some((window, document)) = dom::window_document() else {
            return;
        };
        let size = dom::viewport_size(&window);

        let runner = with_app(|app| {
            if app.cascade.is_none() {
                let surface = match create_overlay(&document) {
                    Ok(surface) => surface,
                    Err(e) => {
                        log::warn!("Failed to create cascade overlay: {:?}", e);
                        return None;
                    }
                };
                let scene = Cascade::with_rng(size, CASCADE_GLYPHS, app.rng(CASCADE_SALT));
                app.cascade = Some(SceneRunner::new(scene, surface, window.clone()));
            }
            app.cascade.clone()
        })
        .flatten();

        if let Some(runner) = runner {
            let mut runner = runner.borrow_mut();
            runner.resize(size);
            runner.start();
        }
    }

    /// Full-viewport canvas above the page that ignores pointer input
    fn create_overlay(document: &Document) -> Result<CanvasSurface, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_id("cascadeCanvas");
        let style = canvas.style();
        style.set_property("position", "fixed")?;
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;
        style.set_property("pointer-events", "none")?;
        style.set_property("z-index", "9999")?;
        document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&canvas)?;
        CanvasSurface::from_canvas(canvas)
    }

    // =========================================================================
    // Input wiring
    // =========================================================================

    fn wire_resize(window: &Window) {
        let win = window.clone();
        dom::listen(window, "resize", move |_: Event| {
            let size = dom::viewport_size(&win);
            let runners = with_app(|app| {
                (
                    app.background.clone(),
                    app.fireworks.clone(),
                    app.cascade.clone(),
                )
            });
            let Some((background, fireworks, cascade)) = runners else {
                return;
            };
            if let Some(runner) = background {
                runner.borrow_mut().resize(size);
            }
            if let Some(runner) = fireworks {
                runner.borrow_mut().resize(size);
            }
            if let Some(runner) = cascade {
                runner.borrow_mut().resize(size);
            }
        });
    }

    /// Horizontal drag on the panorama canvas, mouse and touch
    fn wire_drag(runner: &SharedRunner<Panorama>) {
        let canvas = runner.borrow().surface().canvas().clone();

        let r = runner.clone();
        dom::listen(&canvas, "mousedown", move |e: MouseEvent| {
            r.borrow_mut().scene_mut().press(e.client_x() as f32);
        });

        let r = runner.clone();
        dom::listen(&canvas, "mousemove", move |e: MouseEvent| {
            let mut runner = r.borrow_mut();
            if runner.scene_mut().drag_to(e.client_x() as f32) {
                runner.redraw();
            }
        });

        let r = runner.clone();
        dom::listen(&canvas, "touchstart", move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                r.borrow_mut().scene_mut().press(touch.client_x() as f32);
            }
        });

        let r = runner.clone();
        dom::listen(&canvas, "touchmove", move |e: TouchEvent| {
            let mut runner = r.borrow_mut();
            if !runner.scene().is_dragging() {
                return;
            }
            // Keep the page from scrolling under the drag
            e.prevent_default();
            if let Some(touch) = e.touches().get(0) {
                if runner.scene_mut().drag_to(touch.client_x() as f32) {
                    runner.redraw();
                }
            }
        });

        for event in ["mouseup", "mouseleave", "touchend"] {
            let r = runner.clone();
            dom::listen(&canvas, event, move |_: Event| {
                r.borrow_mut().scene_mut().release();
            });
        }
    }

    fn wire_login_form(document: &Document) {
        let Some(form) = document.get_element_by_id("loginForm") else {
            log::warn!("#loginForm not found");
            return;
        };

        let doc = document.clone();
        let form_el = form.clone();
        dom::listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            let name = input_value(&doc, "nameInput");
            let color = input_value(&doc, "colorInput");

            let Some(outcome) = with_app(|app| app.gate.submit(&name, &color)) else {
                return;
            };
            match outcome {
                GateOutcome::Granted => {
                    log::info!("Login accepted");
                    dom::set_text(&doc, "errorMessage", "");
                    dom::set_text(&doc, "attemptsLeft", "");
                    show_welcome();
                }
                GateOutcome::Denied { remaining } => {
                    dom::set_text(&doc, "errorMessage", content::LOGIN_DENIED);
                    dom::set_text(&doc, "attemptsLeft", &remaining_text(remaining));
                }
                GateOutcome::LockedOut => {
                    log::warn!("Login locked after too many attempts");
                    dom::set_text(&doc, "errorMessage", content::LOGIN_LOCKED);
                    dom::set_text(&doc, "attemptsLeft", "");
                    disable_form(&form_el);
                }
            }
        });
    }

    fn input_value(document: &Document, id: &str) -> String {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn disable_form(form: &Element) {
        if let Ok(inputs) = form.query_selector_all("input") {
            for i in 0..inputs.length() {
                if let Some(input) = inputs.item(i).and_then(|n| n.dyn_into::<HtmlInputElement>().ok()) {
                    input.set_disabled(true);
                }
            }
        }
        if let Ok(Some(button)) = form.query_selector("button") {
            if let Ok(button) = button.dyn_into::<HtmlButtonElement>() {
                button.set_disabled(true);
            }
        }
    }

    fn show_welcome() {
        show_page("welcomePage");
        let Some((window, document)) = dom::window_document() else {
            return;
        };
        dom::set_text(&document, "welcomeMessage", "");

        let mut typewriter = Typewriter::new(content::WELCOME_MESSAGE);
        let interval: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let handle = interval.clone();
        let win = window.clone();
        let id = dom::set_interval(&window, TYPEWRITER_TICK_MS, move || match typewriter.tick() {
            Some(text) => dom::set_text(&document, "welcomeMessage", &text),
            None => {
                if let Some(id) = handle.take() {
                    win.clear_interval_with_handle(id);
                    dom::set_timeout(&win, WELCOME_HOLD_MS, || show_page("mainMenu"));
                }
            }
        });
        interval.set(id);

        start_fireworks();
    }

    // =========================================================================
    // Heart puzzle
    // =========================================================================

    fn init_puzzle(document: &Document) {
        let Some(grid) = document.get_element_by_id("heartsGrid") else {
            log::debug!("No puzzle grid on this page");
            return;
        };
        grid.set_inner_html("");
        with_app(|app| app.puzzle.reset());

        for id in PUZZLE_SEQUENCE {
            let Ok(button) = document.create_element("button") else {
                continue;
            };
            button.set_class_name("heart-button");
            button.set_inner_html(&format!("<span class=\"number\">{}</span>❤️", id));
            let target = button.clone();
            dom::listen(&button, "click", move |_: MouseEvent| press_heart(id, &target));
            if let Err(e) = grid.append_child(&button) {
                log::warn!("Failed to add heart {}: {:?}", id, e);
            }
        }
    }

    fn press_heart(id: u8, button: &Element) {
        let Some((window, document)) = dom::window_document() else {
            return;
        };
        let now = dom::now_ms(&window);
        let Some(outcome) = with_app(|app| app.puzzle.press(id, now)) else {
            return;
        };

        match outcome {
            PressOutcome::Revealed { message, finished } => {
                let _ = button.class_list().add_1("revealed");
                dom::set_text(&document, "secretMessage", &message);
                dom::add_class(&document, "secretMessage", "visible");
                if finished {
                    let win = window.clone();
                    dom::set_timeout(&window, PUZZLE_COMPLETE_DELAY_MS as i32, move || {
                        finish_puzzle(&win)
                    });
                }
            }
            PressOutcome::Shake => {
                dom::set_style(button, "animation", "shake 0.5s");
                let target = button.clone();
                dom::set_timeout(&window, SHAKE_MS, move || {
                    dom::set_style(&target, "animation", "")
                });
            }
            PressOutcome::Inert => {}
        }
    }

    fn finish_puzzle(window: &Window) {
        let now = dom::now_ms(window) + TIMER_SLACK_MS;
        let Some((message, awaiting)) =
            with_app(|app| (app.puzzle.poll(now), app.puzzle.awaiting_completion()))
        else {
            return;
        };
        let Some(message) = message else {
            if awaiting {
                let win = window.clone();
                dom::set_timeout(window, COMPLETION_RETRY_MS, move || finish_puzzle(&win));
            }
            return;
        };
        if let Some(document) = window.document() {
            dom::set_text(&document, "secretMessage", message);
        }
        log::info!("Puzzle complete");
        start_cascade();
    }

    // =========================================================================
    // Letters and poem
    // =========================================================================

    fn wire_modal_dismiss(window: &Window) {
        dom::listen(window, "click", |event: MouseEvent| {
            let on_backdrop = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|el| el.id() == "letterModal");
            if on_backdrop {
                close_letter();
            }
        });
    }

    fn show_poem() {
        if let Some((_, document)) = dom::window_document() {
            dom::set_text(&document, "poemMessage", content::POEM);
            dom::add_class(&document, "poemMessage", "visible");
        }
    }

    fn hide_poem(document: &Document) {
        dom::remove_class(document, "poemMessage", "visible");
    }

    fn with_garden(f: impl FnOnce(&mut Garden)) {
        match with_app(|app| app.garden.clone()).flatten() {
            Some(runner) => f(runner.borrow_mut().scene_mut()),
            None => log::debug!("Garden not started yet"),
        }
    }

    // =========================================================================
    // Page API
    // =========================================================================

    #[wasm_bindgen(js_name = openEnvelope)]
    pub fn open_envelope() {
        show_page("loginPage");
    }

    /// Make `page_id` the only active page; scenes on hidden pages stop
    #[wasm_bindgen(js_name = showPage)]
    pub fn show_page(page_id: &str) {
        let Some((window, document)) = dom::window_document() else {
            return;
        };

        if let Ok(pages) = document.query_selector_all(".page") {
            for i in 0..pages.length() {
                if let Some(page) = pages.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    let _ = page.class_list().remove_1("active");
                }
            }
        }
        dom::add_class(&document, page_id, "active");

        with_app(|app| {
            if page_id != "welcomePage" {
                stop_runner(&app.fireworks);
            }
            if page_id != "galleryPage" {
                stop_runner(&app.panorama);
            }
            if page_id != "surprisePage" {
                stop_runner(&app.garden);
            }
        });

        // Canvases on a freshly shown page need a layout pass before sizing
        match page_id {
            "galleryPage" => dom::set_timeout(&window, PAGE_SETTLE_MS, start_panorama),
            "surprisePage" => dom::set_timeout(&window, PAGE_SETTLE_MS, start_garden),
            _ => {}
        }
    }

    #[wasm_bindgen(js_name = openLetter)]
    pub fn open_letter(number: usize) {
        let Some(letter) = content::letter(number) else {
            log::warn!("No letter {}", number);
            return;
        };
        let Some((_, document)) = dom::window_document() else {
            return;
        };
        dom::set_text(&document, "letterTitle", letter.title);
        dom::set_text(&document, "letterText", letter.body);
        dom::add_class(&document, "letterModal", "active");
    }

    #[wasm_bindgen(js_name = closeLetter)]
    pub fn close_letter() {
        if let Some((_, document)) = dom::window_document() {
            dom::remove_class(&document, "letterModal", "active");
        }
    }

    #[wasm_bindgen(js_name = showSurprise)]
    pub fn show_surprise() {
        show_page("surprisePage");
    }

    #[wasm_bindgen(js_name = addMoreFlowers)]
    pub fn add_more_flowers() {
        with_garden(|garden| garden.add_flowers());
    }

    #[wasm_bindgen(js_name = bloomAllFlowers)]
    pub fn bloom_all_flowers() {
        with_garden(|garden| garden.bloom_all());
    }

    /// Replace the tunables from JSON (missing fields take defaults) and
    /// persist them. Scenes pick them up the next time they are created.
    #[wasm_bindgen(js_name = applySettings)]
    pub fn apply_settings(json: &str) -> bool {
        let Some(settings) = Settings::from_json(json) else {
            return false;
        };
        settings.save();
        with_app(|app| app.settings = settings).is_some()
    }

    #[wasm_bindgen(js_name = clearGarden)]
    pub fn clear_garden() {
        with_garden(|garden| garden.clear());
        if let Some((_, document)) = dom::window_document() {
            hide_poem(&document);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod preview {
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use heart_garden::Settings;
    use heart_garden::consts::*;
    use heart_garden::renderer::frame_loop::step;
    use heart_garden::renderer::{ManualScheduler, RecordingSurface, RenderLoop};
    use heart_garden::sim::puzzle::PUZZLE_SEQUENCE;
    use heart_garden::sim::{Cascade, Fireworks, Garden, HeartField, HeartPuzzle, Panorama, Scene};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const DEFAULT_SEED: u64 = 0x5EED;

    /// A scene with its own frame source and recording target
    struct Headless<S> {
        render_loop: RenderLoop<S>,
        scheduler: ManualScheduler,
        surface: RecordingSurface,
        now_ms: f64,
        commands: usize,
    }

    impl<S: Scene> Headless<S> {
        fn new(scene: S, size: Vec2) -> Self {
            let mut render_loop = RenderLoop::new(scene);
            let mut scheduler = ManualScheduler::new();
            render_loop.start(&mut scheduler);
            Self {
                render_loop,
                scheduler,
                surface: RecordingSurface::new(size.x, size.y),
                now_ms: 0.0,
                commands: 0,
            }
        }

        /// Run until `frames` refreshes pass or the loop lapses
        fn run(&mut self, frames: usize) -> usize {
            let mut advanced = 0;
            for _ in 0..frames {
                self.now_ms += FRAME_MS;
                if step(&mut self.render_loop, &mut self.scheduler, &mut self.surface, self.now_ms) == 0 {
                    break;
                }
                advanced += 1;
                self.commands += self.surface.take().len();
            }
            advanced
        }

        fn scene(&self) -> &S {
            self.render_loop.scene()
        }

        fn scene_mut(&mut self) -> &mut S {
            self.render_loop.scene_mut()
        }
    }

    pub fn run() {
        let settings = Settings::load();
        let seed = settings.seed.unwrap_or(DEFAULT_SEED);
        let rng = |salt: u64| Pcg32::seed_from_u64(seed.wrapping_add(salt));
        let viewport = Vec2::new(1280.0, 720.0);

        let mut hearts = Headless::new(
            HeartField::with_rng(viewport, settings.background_hearts, rng(1)),
            viewport,
        );
        hearts.run(600);
        log::info!(
            "{}: {} hearts after {} frames ({} draw commands)",
            hearts.scene().name(),
            hearts.scene().hearts().len(),
            hearts.render_loop.frames(),
            hearts.commands
        );

        let mut fireworks = Headless::new(
            Fireworks::with_rng(viewport, settings.burst_policy(), rng(2)),
            viewport,
        );
        fireworks.run(600);
        log::info!(
            "{}: {} bursts, {} sparks alive",
            fireworks.scene().name(),
            fireworks.scene().bursts(),
            fireworks.scene().sparks().len()
        );

        let garden_size = Vec2::splat(GARDEN_SIZE);
        let mut garden = Headless::new(
            Garden::with_rng(garden_size, settings.garden_sizes(), rng(3)),
            garden_size,
        );
        garden.scene_mut().add_flowers();
        garden.scene_mut().set_on_bloom_complete(|| log::info!("garden: bloom complete"));
        garden.scene_mut().bloom_all();
        garden.run(180);
        let full = garden
            .scene()
            .flowers()
            .iter()
            .filter(|f| f.bloom() >= 1.0)
            .count();
        log::info!(
            "{}: {}/{} flowers in full bloom, poem visible: {}",
            garden.scene().name(),
            full,
            garden.scene().flowers().len(),
            garden.scene().poem_visible()
        );

        let mut panorama = Headless::new(
            Panorama::with_sensitivity(viewport.x, settings.drag_sensitivity),
            Vec2::new(viewport.x, PANORAMA_HEIGHT),
        );
        panorama.scene_mut().press(400.0);
        panorama.scene_mut().drag_to(250.0);
        panorama.scene_mut().release();
        panorama.run(1);
        log::info!(
            "{}: angle {:.2} rad, {} ring elements visible",
            panorama.scene().name(),
            panorama.scene().angle(),
            panorama.scene().ring().filter(|p| p.visible).count()
        );

        let mut puzzle = HeartPuzzle::new();
        for id in PUZZLE_SEQUENCE {
            puzzle.press(id, 0.0);
        }
        let message = puzzle.poll(PUZZLE_COMPLETE_DELAY_MS).unwrap_or("(pending)");
        log::info!("puzzle: {}", message);

        let mut cascade = Headless::new(Cascade::with_rng(viewport, CASCADE_GLYPHS, rng(4)), viewport);
        let frames = cascade.run(1200);
        log::info!(
            "{}: finished after {} frames (released {})",
            cascade.scene().name(),
            frames,
            cascade.scene().released()
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Heart Garden (native) starting...");
    log::info!("Scenes draw to Canvas 2D in the browser - run with `trunk serve` for the page");
    preview::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
