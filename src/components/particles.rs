use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ParticlesProps {
    pub particle_colors: Vec<&'static str>,
    #[prop_or(200)]
    pub particle_count: u32,
    #[prop_or(10.0)]
    pub particle_spread: f64,
    #[prop_or(0.1)]
    pub speed: f64,
    #[prop_or(100.0)]
    pub particle_base_size: f64,
    #[prop_or(false)]
    pub move_particles_on_hover: bool,
    #[prop_or(false)]
    pub alpha_particles: bool,
    #[prop_or(false)]
    pub disable_rotation: bool,
}

struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    radius: f64,
    color: usize,
    phase: f64,
}

fn random() -> f64 {
    js_sys::Math::random()
}

fn spawn(props: &ParticlesProps, width: f64, height: f64) -> Vec<Particle> {
    (0..props.particle_count)
        .map(|_| {
            let angle = random() * std::f64::consts::TAU;
            let velocity = props.speed * (0.2 + random() * props.particle_spread / 10.0);
            Particle {
                x: random() * width,
                y: random() * height,
                vx: angle.cos() * velocity,
                vy: angle.sin() * velocity,
                radius: props.particle_base_size / 100.0 * (0.3 + random()),
                color: (random() * props.particle_colors.len() as f64) as usize
                    % props.particle_colors.len().max(1),
                phase: random() * std::f64::consts::TAU,
            }
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn step_and_draw(
    context: &CanvasRenderingContext2d,
    particles: &mut [Particle],
    colors: &[&'static str],
    width: f64,
    height: f64,
    pointer: Option<(f64, f64)>,
    alpha_particles: bool,
    disable_rotation: bool,
) {
    context.clear_rect(0.0, 0.0, width, height);
    for particle in particles.iter_mut() {
        particle.x += particle.vx;
        particle.y += particle.vy;
        if !disable_rotation {
            particle.phase += 0.002;
            particle.x += particle.phase.cos() * 0.1;
            particle.y += particle.phase.sin() * 0.1;
        }
        if let Some((px, py)) = pointer {
            let dx = particle.x - px;
            let dy = particle.y - py;
            let dist_sq = (dx * dx + dy * dy).max(1.0);
            if dist_sq < 10_000.0 {
                particle.x += dx / dist_sq * 40.0;
                particle.y += dy / dist_sq * 40.0;
            }
        }
        // Wrap around the edges so the field stays dense.
        if particle.x < -particle.radius {
            particle.x = width + particle.radius;
        } else if particle.x > width + particle.radius {
            particle.x = -particle.radius;
        }
        if particle.y < -particle.radius {
            particle.y = height + particle.radius;
        } else if particle.y > height + particle.radius {
            particle.y = -particle.radius;
        }

        if alpha_particles {
            context.set_global_alpha(0.4 + 0.6 * (particle.phase.sin() * 0.5 + 0.5));
        }
        context.begin_path();
        let _ = context.arc(
            particle.x,
            particle.y,
            particle.radius,
            0.0,
            std::f64::consts::TAU,
        );
        context.set_fill_style_str(colors.get(particle.color).copied().unwrap_or("#ffffff"));
        context.fill();
        if alpha_particles {
            context.set_global_alpha(1.0);
        }
    }
}

/// Full-slot animated particle field drawn on a canvas. Purely decorative:
/// the loop stops and listeners detach when the component unmounts.
#[function_component(Particles)]
pub fn particles(props: &ParticlesProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let config = ParticlesProps {
            particle_colors: props.particle_colors.clone(),
            particle_count: props.particle_count,
            particle_spread: props.particle_spread,
            speed: props.speed,
            particle_base_size: props.particle_base_size,
            move_particles_on_hover: props.move_particles_on_hover,
            alpha_particles: props.alpha_particles,
            disable_rotation: props.disable_rotation,
        };
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(canvas) =
                    canvas_ref.cast::<HtmlCanvasElement>()
                {
                    start_animation(canvas, config)
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            class="particles-canvas"
            style="position: absolute; inset: 0; width: 100%; height: 100%;"
        ></canvas>
    }
}

fn start_animation(canvas: HtmlCanvasElement, config: ParticlesProps) -> Box<dyn FnOnce()> {
    let colors = config.particle_colors.clone();
    let width = canvas.client_width().max(1) as f64;
    let height = canvas.client_height().max(1) as f64;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let context = match canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    {
        Some(context) => context,
        None => return Box::new(|| ()),
    };

    let particles = Rc::new(RefCell::new(spawn(&config, width, height)));
    let pointer: Rc<Cell<Option<(f64, f64)>>> = Rc::new(Cell::new(None));
    let running = Rc::new(Cell::new(true));

    // Pointer tracking only when hover reaction is requested.
    let pointer_listener = if config.move_particles_on_hover {
        let pointer = pointer.clone();
        let canvas_for_rect = canvas.clone();
        let listener = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(
            move |event: web_sys::MouseEvent| {
                let rect = canvas_for_rect.get_bounding_client_rect();
                pointer.set(Some((
                    event.client_x() as f64 - rect.left(),
                    event.client_y() as f64 - rect.top(),
                )));
            },
        );
        let attached = canvas
            .add_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref())
            .is_ok();
        attached.then_some(listener)
    } else {
        None
    };

    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(0));
    {
        let frame_inner = frame.clone();
        let raf_id = raf_id.clone();
        let particles = particles.clone();
        let pointer = pointer.clone();
        let running = running.clone();
        let alpha_particles = config.alpha_particles;
        let disable_rotation = config.disable_rotation;
        *frame.borrow_mut() = Some(Closure::new(move || {
            if !running.get() {
                return;
            }
            step_and_draw(
                &context,
                &mut particles.borrow_mut(),
                &colors,
                width,
                height,
                pointer.get(),
                alpha_particles,
                disable_rotation,
            );
            if let Some(window) = web_sys::window() {
                if let Some(frame) = frame_inner.borrow().as_ref() {
                    if let Ok(id) =
                        window.request_animation_frame(frame.as_ref().unchecked_ref())
                    {
                        raf_id.set(id);
                    }
                }
            }
        }));
    }
    if let Some(window) = web_sys::window() {
        if let Some(first) = frame.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(first.as_ref().unchecked_ref()) {
                raf_id.set(id);
            }
        }
    }

    Box::new(move || {
        running.set(false);
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(raf_id.get());
        }
        if let Some(listener) = pointer_listener {
            let _ = canvas
                .remove_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref());
        }
        // The frame closure stays owned here until after cancellation.
        frame.borrow_mut().take();
    })
}
