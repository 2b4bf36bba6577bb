use std::collections::{HashMap, HashSet};
use std::hash::Hash;
pub use winit::keyboard::KeyCode;
pub use winit::event::MouseButton;

/// Represents a raw input source that can be bound to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Key(KeyCode),
    Mouse(MouseButton),
}

/// A discrete input occurrence, delivered to the current scene in arrival order.
///
/// Positions are window pixels with the origin at the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    MousePress { x: f32, y: f32, button: MouseButton },
    MouseRelease { x: f32, y: f32, button: MouseButton },
    /// Cursor moved while at least one mouse button was held.
    MouseDrag { x: f32, y: f32, dx: f32, dy: f32, buttons: Vec<MouseButton> },
    /// Positive `scroll_y` means the wheel moved away from the user.
    MouseScroll { x: f32, y: f32, scroll_x: f32, scroll_y: f32 },
    KeyPress { key: KeyCode },
    KeyRelease { key: KeyCode },
    Resize { width: u32, height: u32 },
}

/// Raw hardware state for a single frame.
#[derive(Debug, Default)]
pub struct InputState {
    pub keys_held: HashSet<KeyCode>,
    pub keys_pressed: HashSet<KeyCode>,
    pub keys_released: HashSet<KeyCode>,

    pub mouse_pos: [f32; 2],
    pub mouse_wheel: f32,
    pub mouse_held: HashSet<MouseButton>,
    pub mouse_pressed: HashSet<MouseButton>,
    pub mouse_released: HashSet<MouseButton>,

    /// Events not yet handed to a scene.
    pub events: Vec<InputEvent>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_frame_state(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.mouse_pressed.clear();
        self.mouse_released.clear();
        self.mouse_wheel = 0.0;
    }

    /// Take every pending event, leaving the queue empty.
    pub fn drain_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn key_down(&mut self, key: KeyCode) {
        if self.keys_held.insert(key) {
            self.keys_pressed.insert(key);
            self.events.push(InputEvent::KeyPress { key });
        }
    }

    pub fn key_up(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
        self.keys_released.insert(key);
        self.events.push(InputEvent::KeyRelease { key });
    }

    pub fn mouse_down(&mut self, button: MouseButton) {
        if self.mouse_held.insert(button) {
            self.mouse_pressed.insert(button);
            let [x, y] = self.mouse_pos;
            self.events.push(InputEvent::MousePress { x, y, button });
        }
    }

    pub fn mouse_up(&mut self, button: MouseButton) {
        self.mouse_held.remove(&button);
        self.mouse_released.insert(button);
        let [x, y] = self.mouse_pos;
        self.events.push(InputEvent::MouseRelease { x, y, button });
    }

    /// Record a cursor move; emits a drag event when any button is held.
    pub fn mouse_moved(&mut self, x: f32, y: f32) {
        let [px, py] = self.mouse_pos;
        self.mouse_pos = [x, y];
        if !self.mouse_held.is_empty() {
            let buttons: Vec<MouseButton> = self.mouse_held.iter().copied().collect();
            self.events.push(InputEvent::MouseDrag { x, y, dx: x - px, dy: y - py, buttons });
        }
    }

    pub fn scrolled(&mut self, scroll_x: f32, scroll_y: f32) {
        self.mouse_wheel += scroll_y;
        let [x, y] = self.mouse_pos;
        self.events.push(InputEvent::MouseScroll { x, y, scroll_x, scroll_y });
    }

    pub fn resized(&mut self, width: u32, height: u32) {
        self.events.push(InputEvent::Resize { width, height });
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool { self.keys_held.contains(&key) }
    pub fn is_key_pressed(&self, key: KeyCode) -> bool { self.keys_pressed.contains(&key) }
    pub fn is_key_released(&self, key: KeyCode) -> bool { self.keys_released.contains(&key) }

    pub fn is_mouse_held(&self, button: MouseButton) -> bool { self.mouse_held.contains(&button) }
    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool { self.mouse_pressed.contains(&button) }
    pub fn is_mouse_released(&self, button: MouseButton) -> bool { self.mouse_released.contains(&button) }
}

/// Maps logical actions (defined by the game) to one or more physical inputs.
#[derive(Debug, Clone)]
pub struct ActionMap<A: Hash + Eq + Copy> {
    bindings: HashMap<A, Vec<InputSource>>,
}

impl<A: Hash + Eq + Copy> ActionMap<A> {
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    pub fn bind(&mut self, action: A, source: InputSource) {
        self.bindings.entry(action).or_default().push(source);
    }

    /// Returns true if the action was triggered this frame (pressed).
    pub fn is_pressed(&self, action: A, input: &InputState) -> bool {
        self.bindings.get(&action).is_some_and(|sources| {
            sources.iter().any(|s| match s {
                InputSource::Key(k) => input.is_key_pressed(*k),
                InputSource::Mouse(b) => input.is_mouse_pressed(*b),
            })
        })
    }

    /// Returns true if the action is currently being held.
    pub fn is_held(&self, action: A, input: &InputState) -> bool {
        self.bindings.get(&action).is_some_and(|sources| {
            sources.iter().any(|s| match s {
                InputSource::Key(k) => input.is_key_held(*k),
                InputSource::Mouse(b) => input.is_mouse_held(*b),
            })
        })
    }

    /// Returns true if any bound source was released this frame.
    pub fn is_released(&self, action: A, input: &InputState) -> bool {
        self.bindings.get(&action).is_some_and(|sources| {
            sources.iter().any(|s| match s {
                InputSource::Key(k) => input.is_key_released(*k),
                InputSource::Mouse(b) => input.is_mouse_released(*b),
            })
        })
    }
}

impl<A: Hash + Eq + Copy> Default for ActionMap<A> {
    fn default() -> Self { Self::new() }
}
