//! Translation of egui input into scene [`Command`]s.

use knot_core::scene::Command;

/// Maps a key press to its command, if it is bound.
///
/// egui reports keypad `+`/`-` as [`egui::Key::Plus`] / [`egui::Key::Minus`].
pub fn command_for_key(key: egui::Key) -> Option<Command> {
    match key {
        egui::Key::Escape => Some(Command::Quit),
        egui::Key::R => Some(Command::Restart),
        egui::Key::P => Some(Command::TogglePause),
        egui::Key::F1 => Some(Command::ToggleHelp),
        egui::Key::Plus => Some(Command::IncreaseSteps),
        egui::Key::Minus => Some(Command::DecreaseSteps),
        _ => None,
    }
}

/// Maps one raw egui event to a command.
///
/// Only fresh key presses (no auto-repeat) and primary-button presses count.
/// Pointer positions are made relative to `origin`, the canvas corner.
pub fn command_for_event(event: &egui::Event, origin: egui::Pos2) -> Option<Command> {
    match event {
        egui::Event::Key {
            key,
            pressed: true,
            repeat: false,
            ..
        } => command_for_key(*key),
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            ..
        } => {
            let local = *pos - origin;
            Some(Command::AddPoint {
                x: local.x as i32,
                y: local.y as i32,
            })
        }
        _ => None,
    }
}

/// Drains this frame's input events, in arrival order.
///
/// A window close request is reported as a trailing [`Command::Quit`].
pub fn collect_commands(ctx: &egui::Context, origin: egui::Pos2) -> Vec<Command> {
    ctx.input(|i| {
        let mut commands: Vec<Command> = i
            .events
            .iter()
            .filter_map(|event| command_for_event(event, origin))
            .collect();
        if i.viewport().close_requested() {
            commands.push(Command::Quit);
        }
        commands
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(key: egui::Key, pressed: bool, repeat: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat,
            modifiers: egui::Modifiers::default(),
        }
    }

    fn click(x: f32, y: f32, button: egui::PointerButton, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(x, y),
            button,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    fn collect_from(events: Vec<egui::Event>) -> Vec<Command> {
        let ctx = egui::Context::default();
        let mut raw_input = egui::RawInput::default();
        raw_input.events = events;

        let mut commands = Vec::new();
        let _ = ctx.run(raw_input, |ctx| {
            commands = collect_commands(ctx, egui::Pos2::ZERO);
        });
        commands
    }

    #[test]
    fn bound_keys_map_to_commands() {
        let cases = [
            (egui::Key::Escape, Command::Quit),
            (egui::Key::R, Command::Restart),
            (egui::Key::P, Command::TogglePause),
            (egui::Key::F1, Command::ToggleHelp),
            (egui::Key::Plus, Command::IncreaseSteps),
            (egui::Key::Minus, Command::DecreaseSteps),
        ];
        for (key, expected) in cases {
            assert_eq!(command_for_key(key), Some(expected), "{key:?}");
        }
        assert_eq!(command_for_key(egui::Key::A), None);
    }

    #[test]
    fn releases_and_repeats_are_ignored() {
        let origin = egui::Pos2::ZERO;
        assert_eq!(
            command_for_event(&key_event(egui::Key::P, false, false), origin),
            None
        );
        assert_eq!(
            command_for_event(&key_event(egui::Key::P, true, true), origin),
            None
        );
        assert_eq!(
            command_for_event(&key_event(egui::Key::P, true, false), origin),
            Some(Command::TogglePause)
        );
    }

    #[test]
    fn primary_press_places_point_relative_to_origin() {
        let event = click(110.7, 95.2, egui::PointerButton::Primary, true);
        assert_eq!(
            command_for_event(&event, egui::pos2(10.0, 5.0)),
            Some(Command::AddPoint { x: 100, y: 90 })
        );
    }

    #[test]
    fn other_buttons_and_releases_do_not_place_points() {
        let origin = egui::Pos2::ZERO;
        let secondary = click(1.0, 1.0, egui::PointerButton::Secondary, true);
        let release = click(1.0, 1.0, egui::PointerButton::Primary, false);
        assert_eq!(command_for_event(&secondary, origin), None);
        assert_eq!(command_for_event(&release, origin), None);
    }

    #[test]
    fn collect_commands_keeps_event_order() {
        let commands = collect_from(vec![
            click(100.0, 100.0, egui::PointerButton::Primary, true),
            key_event(egui::Key::F1, true, false),
            key_event(egui::Key::Q, true, false),
            key_event(egui::Key::R, true, false),
        ]);

        assert_eq!(
            commands,
            vec![
                Command::AddPoint { x: 100, y: 100 },
                Command::ToggleHelp,
                Command::Restart,
            ]
        );
    }
}
