use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const DURATION_MS: f64 = 5_000.0;
const COLORS: [&str; 4] = ["#5B8FB9", "#B6D4E8", "#F5F5F5", "#FFD700"];
const GRAVITY: f64 = 0.12;
const DRAG: f64 = 0.995;
const FADE: f64 = 0.012;

thread_local! {
    static PLAYED: Cell<bool> = Cell::new(false);
}

struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    size: f64,
    alpha: f64,
    color: &'static str,
}

impl Particle {
    /// Emit `count` particles from one point. `angle` and `spread` are in
    /// degrees, with 90 pointing straight up.
    fn burst(x: f64, y: f64, angle: f64, spread: f64, count: usize, out: &mut Vec<Particle>) {
        for _ in 0..count {
            let theta = (angle + (js_sys::Math::random() - 0.5) * spread).to_radians();
            let speed = 6.0 + js_sys::Math::random() * 6.0;
            out.push(Particle {
                x,
                y,
                vx: theta.cos() * speed,
                vy: -theta.sin() * speed,
                size: 4.0 + js_sys::Math::random() * 4.0,
                alpha: 1.0,
                color: COLORS[(js_sys::Math::random() * COLORS.len() as f64) as usize
                    % COLORS.len()],
            });
        }
    }

    fn step(&mut self) {
        self.vx *= DRAG;
        self.vy = self.vy * DRAG + GRAVITY;
        self.x += self.vx;
        self.y += self.vy;
        self.alpha -= FADE;
    }
}

/// Fire the launch celebration: two edge emitters for five seconds plus one
/// big opening burst from the lower center. One-shot per page load; calling
/// it again is a no-op, it never re-arms.
pub fn play() {
    if PLAYED.with(|played| played.replace(true)) {
        return;
    }
    // Purely cosmetic. Whatever goes wrong in here stays in here.
    let _ = run();
}

fn run() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    canvas.set_attribute(
        "style",
        "position: fixed; top: 0; left: 0; pointer-events: none; z-index: 1000;",
    )?;
    body.append_child(&canvas)?;

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let mut initial = Vec::new();
    // Big burst in the lower center; the edge emitters take over per frame.
    Particle::burst(width * 0.5, height * 0.6, 90.0, 100.0, 150, &mut initial);
    let particles = Rc::new(RefCell::new(initial));

    let end = js_sys::Date::now() + DURATION_MS;

    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let frame_for_tick = frame.clone();
    let window_for_tick = window.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now = js_sys::Date::now();
        let done = {
            let mut particles = particles.borrow_mut();
            if now < end {
                Particle::burst(0.0, height * 0.5, 60.0, 55.0, 3, &mut particles);
                Particle::burst(width, height * 0.5, 120.0, 55.0, 3, &mut particles);
            }
            particles.retain(|p| p.alpha > 0.0 && p.y < height + 20.0);
            context.clear_rect(0.0, 0.0, width, height);
            for p in particles.iter_mut() {
                p.step();
                context.set_global_alpha(p.alpha.max(0.0));
                context.set_fill_style_str(p.color);
                context.fill_rect(p.x, p.y, p.size, p.size);
            }
            now >= end && particles.is_empty()
        };
        if done {
            canvas.remove();
            return;
        }
        if let Some(callback) = frame_for_tick.borrow().as_ref() {
            let _ = window_for_tick.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));

    window.request_animation_frame(frame.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;
    Ok(())
}
