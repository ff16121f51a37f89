use egui::{Context, Key, PointerButton, Pos2, Rect};

/// Pointer input for the drawing surface, in device pixels relative to the
/// canvas' top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A button was pressed over the canvas
    PointerDown { position: Pos2, button: PointerButton },
    /// The pointer moved over the canvas, with or without buttons held
    PointerMove { position: Pos2 },
    /// A button was released over the canvas
    PointerUp { position: Pos2, button: PointerButton },
    /// The pointer left the canvas
    PointerLeave,
    /// Ctrl + mouse wheel over the canvas; above 1 zooms in, below 1 out
    Zoom { factor: f32 },
    /// The user asked to abandon the current gesture
    Cancel,
}

const BUTTONS: [PointerButton; 3] = [
    PointerButton::Primary,
    PointerButton::Secondary,
    PointerButton::Middle,
];

/// Turns raw egui input into [`InputEvent`]s for one canvas.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects this frame's events for the canvas occupying `canvas` in
    /// screen coordinates.
    pub fn process_input(&mut self, ctx: &Context, canvas: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let local = |pos: Pos2| Pos2::new(pos.x - canvas.min.x, pos.y - canvas.min.y);

        ctx.input(|input| {
            let hover = input.pointer.hover_pos().filter(|pos| canvas.contains(*pos));

            match hover {
                Some(pos) => {
                    if Some(pos) != self.last_pointer_pos {
                        events.push(InputEvent::PointerMove { position: local(pos) });
                    }
                    self.last_pointer_pos = Some(pos);
                }
                None => {
                    if self.last_pointer_pos.take().is_some() {
                        events.push(InputEvent::PointerLeave);
                    }
                }
            }

            if hover.is_some() && input.modifiers.command {
                // egui turns Ctrl + wheel into a zoom delta instead of a scroll.
                let factor = input.zoom_delta();
                if factor != 1.0 {
                    events.push(InputEvent::Zoom { factor });
                }
            }

            if let Some(pos) = hover {
                for button in BUTTONS {
                    if input.pointer.button_pressed(button) {
                        events.push(InputEvent::PointerDown { position: local(pos), button });
                    }
                    if input.pointer.button_released(button) {
                        events.push(InputEvent::PointerUp { position: local(pos), button });
                    }
                }
            }

            if input.key_pressed(Key::Escape) {
                events.push(InputEvent::Cancel);
            }
        });

        events
    }
}
