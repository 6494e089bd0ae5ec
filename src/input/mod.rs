use macroquad::prelude::*;

use crate::application::{Cadence, Control, Simulation};
use crate::domain::EngineError;
use crate::ui::Button;

/// Controls triggered by key presses this frame
pub fn keyboard_controls() -> Vec<Control> {
    let bindings: [(KeyCode, Control); 2] = [
        (KeyCode::Space, Control::Toggle),
        (KeyCode::R, Control::Reset),
    ];

    bindings
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, control)| *control)
        .collect()
}

/// Controls triggered by button clicks this frame
pub fn button_controls(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Control> {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .map(Button::control)
        .collect()
}

pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}

/// Apply controls in order; a reset also restarts the tick timer
pub fn process_controls(
    simulation: &mut Simulation,
    cadence: &mut Cadence,
    controls: &[Control],
) -> Result<(), EngineError> {
    controls.iter().try_for_each(|&control| {
        if control == Control::Reset {
            cadence.reset();
        }
        simulation.apply(control)
    })
}
