use egui::{Context, PointerButton, Pos2, Rect};

const BUTTONS: [PointerButton; 3] = [PointerButton::Primary, PointerButton::Secondary, PointerButton::Middle];

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// The same position relative to the canvas origin
    pub canvas_position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

impl InputLocation {
    /// Location for a point already in canvas coordinates
    pub fn at_canvas(pos: Pos2) -> Self {
        Self {
            position: pos,
            canvas_position: pos,
            is_in_canvas: true,
        }
    }
}

/// Pointer activity over the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse button was released
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove {
        location: InputLocation,
        /// Buttons that are currently held down
        held_buttons: Vec<PointerButton>,
    },
    PointerEnter {
        location: InputLocation,
    },
    PointerLeave {
        last_known_location: InputLocation,
    },
}

/// Converts raw egui input into [`InputEvent`]s in canvas coordinates
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            canvas_position: (pos - self.canvas_rect.min).to_pos2(),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Process this frame's pointer input.
    ///
    /// Presses come first and releases last so that a press and a drag in
    /// the same frame reach the canvas in gesture order.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();

            if let Some(pos) = hover {
                if self.last_pointer_pos.is_none() {
                    events.push(InputEvent::PointerEnter {
                        location: self.make_location(pos),
                    });
                }
                for button in BUTTONS {
                    if input.pointer.button_pressed(button) {
                        events.push(InputEvent::PointerDown {
                            location: self.make_location(pos),
                            button,
                        });
                    }
                }
                if Some(pos) != self.last_pointer_pos {
                    let held_buttons = BUTTONS
                        .into_iter()
                        .filter(|&button| input.pointer.button_down(button))
                        .collect();
                    events.push(InputEvent::PointerMove {
                        location: self.make_location(pos),
                        held_buttons,
                    });
                }
                for button in BUTTONS {
                    if input.pointer.button_released(button) {
                        events.push(InputEvent::PointerUp {
                            location: self.make_location(pos),
                            button,
                        });
                    }
                }
            } else if let Some(last) = self.last_pointer_pos {
                // released outside the window still ends the gesture
                for button in BUTTONS {
                    if input.pointer.button_released(button) {
                        events.push(InputEvent::PointerUp {
                            location: self.make_location(last),
                            button,
                        });
                    }
                }
                events.push(InputEvent::PointerLeave {
                    last_known_location: self.make_location(last),
                });
            }

            self.last_pointer_pos = hover;
        });

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations_are_canvas_relative() {
        let handler = InputHandler::new(Rect::from_min_size(Pos2::new(100.0, 50.0), egui::vec2(200.0, 200.0)));
        let inside = handler.make_location(Pos2::new(130.0, 80.0));
        assert_eq!(inside.canvas_position, Pos2::new(30.0, 30.0));
        assert!(inside.is_in_canvas);

        let outside = handler.make_location(Pos2::new(10.0, 10.0));
        assert!(!outside.is_in_canvas);
        assert_eq!(outside.canvas_position, Pos2::new(-90.0, -40.0));
    }
}
