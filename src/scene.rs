use crate::clock::IntervalSchedule;
use crate::engine::{Engine, Game};
use crate::input::InputEvent;

/// Default period between scene ticks, in seconds.
pub const DEFAULT_TICK_INTERVAL: f32 = 1.0 / 30.0;

/// What a [`SceneDirector`] needs from whatever runs it.
pub trait SceneHost {
    /// Length of the current update step, in seconds.
    fn dt(&self) -> f32;
    /// Take the input events that arrived since the last call.
    fn drain_events(&mut self) -> Vec<InputEvent>;
    fn request_quit(&mut self);
}

pub enum SceneAction<C: SceneHost = Engine> {
    None,
    /// Hide the current scene and show this one.
    Switch(Box<dyn Scene<C>>),
    Quit,
}

/// A screen of the application.
///
/// Only the scene currently shown by the [`SceneDirector`] receives events,
/// ticks and draws.  `on_init` runs once, right before the first `on_show`.
pub trait Scene<C: SceneHost = Engine> {
    fn on_init(&mut self, _host: &mut C) {}
    fn on_show(&mut self, _host: &mut C) {}
    fn on_hide(&mut self, _host: &mut C) {}

    fn on_event(&mut self, _host: &mut C, _event: &InputEvent) -> SceneAction<C> {
        SceneAction::None
    }

    /// Run the scene's actors once; `dt` is the time since the previous tick.
    fn tick(&mut self, _host: &mut C, _dt: f32) {}

    fn draw(&mut self, host: &mut C);

    /// While false the scene is not ticked at all.
    fn has_actors(&self) -> bool { false }

    fn tick_interval(&self) -> f32 { DEFAULT_TICK_INTERVAL }
}

// ── Actors ──────────────────────────────────────────────────────────────────

/// What an actor wants after running.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActorStatus {
    Continue,
    /// Remove the actor once the current tick finishes.
    Done,
}

type ActorFn<S, C> = Box<dyn FnMut(&mut S, &mut C, f32) -> ActorStatus>;

/// Per-tick callbacks owned by a scene `S`, run against a context `C`.
pub struct Actors<S, C> {
    entries: Vec<ActorFn<S, C>>,
}

impl<S, C> Actors<S, C> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn add(&mut self, actor: impl FnMut(&mut S, &mut C, f32) -> ActorStatus + 'static) {
        self.entries.push(Box::new(actor));
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl<S, C> Default for Actors<S, C> {
    fn default() -> Self { Self::new() }
}

/// Run every actor stored in `slot(scene)` once.
///
/// The actor set is moved out of the scene for the duration of the tick so
/// each callback can borrow the scene mutably.  Actors that return
/// [`ActorStatus::Done`] are dropped; actors added during the tick are kept
/// and first run on the next one.
pub fn run_actors<S, C>(
    scene: &mut S,
    ctx: &mut C,
    dt: f32,
    slot: fn(&mut S) -> &mut Actors<S, C>,
) {
    let mut running = std::mem::take(slot(scene));
    running.entries.retain_mut(|actor| actor(scene, ctx, dt) == ActorStatus::Continue);

    let added = std::mem::take(slot(scene));
    running.entries.extend(added.entries);
    *slot(scene) = running;
}

// ── SceneDirector ───────────────────────────────────────────────────────────

/// Shows one scene at a time and drives its events, ticks and draws.
pub struct SceneDirector<C: SceneHost = Engine> {
    current: Box<dyn Scene<C>>,
    initialized: bool,
    schedule: IntervalSchedule,
}

impl<C: SceneHost> SceneDirector<C> {
    pub fn new(initial: Box<dyn Scene<C>>) -> Self {
        let schedule = IntervalSchedule::new(initial.tick_interval());
        Self { current: initial, initialized: false, schedule }
    }

    /// Show the initial scene.
    pub fn start(&mut self, host: &mut C) {
        self.show_current(host);
    }

    /// Hide the current scene and show `next` in its place.
    pub fn show(&mut self, host: &mut C, next: Box<dyn Scene<C>>) {
        self.current.on_hide(host);
        self.schedule.stop();
        self.current = next;
        self.schedule = IntervalSchedule::new(self.current.tick_interval());
        self.initialized = false;
        self.show_current(host);
    }

    /// Deliver pending events, then tick the scene if an interval is due.
    pub fn update(&mut self, host: &mut C) {
        self.dispatch_events(host);
        self.run_schedule(host);
    }

    pub fn draw(&mut self, host: &mut C) {
        self.current.draw(host);
    }

    /// Whether the current scene is being ticked.
    pub fn is_ticking(&self) -> bool {
        self.schedule.is_running()
    }

    fn show_current(&mut self, host: &mut C) {
        if !self.initialized {
            self.initialized = true;
            self.current.on_init(host);
        }
        self.current.on_show(host);
    }

    fn apply(&mut self, host: &mut C, action: SceneAction<C>) {
        match action {
            SceneAction::None => {}
            SceneAction::Switch(next) => self.show(host, next),
            SceneAction::Quit => host.request_quit(),
        }
    }

    fn dispatch_events(&mut self, host: &mut C) {
        for event in host.drain_events() {
            let action = self.current.on_event(host, &event);
            self.apply(host, action);
        }
    }

    fn run_schedule(&mut self, host: &mut C) {
        if self.current.has_actors() {
            self.schedule.start();
        } else {
            self.schedule.stop();
        }
        let due = self.schedule.advance(host.dt());
        for _ in 0..due.ticks {
            self.current.tick(host, due.dt);
            if !self.current.has_actors() {
                self.schedule.stop();
                break;
            }
        }
    }
}

impl Game for SceneDirector<Engine> {
    fn on_enter(&mut self, engine: &mut Engine) {
        self.start(engine);
    }

    fn update(&mut self, engine: &mut Engine) {
        SceneDirector::update(self, engine);
    }

    fn render(&mut self, engine: &mut Engine) {
        self.draw(engine);
    }
}
