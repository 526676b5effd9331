/*
 * Unit tests for the presentation layer
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_channel_presenter_forwards
 * - test_parse_line
 * - test_input_reader_forwards_commands
 * - test_input_reader_eof_terminates
 * - test_display_buttons
 * - test_display_scrollback
 * - test_display_json
 * - test_display_run_ends_with_controller
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod presentation_tests {
    use crate::presentation::input::{parse_line, Input};
    use crate::presentation::terminal::ButtonAppearance;
    use crate::presentation::{ChannelPresenter, InputReader, OutputFormat, PresentationLayer, TerminalDisplay};
    use crate::shared::Direction::Up;
    use crate::shared::{Building, ColorHint, Command, Notification};
    use crossbeam_channel::unbounded;
    use std::io::Cursor;

    #[test]
    fn test_channel_presenter_forwards() {
        // Arrange
        let (notification_tx, notification_rx) = unbounded::<Notification>();
        let presenter = ChannelPresenter::new(notification_tx);

        // Act
        presenter.on_motion_started(4);
        presenter.on_direction_changed("↑", ColorHint::Yellow);
        presenter.on_floor_changed(2);
        presenter.on_motion_ended(2);
        presenter.on_log_appended("• hello");
        presenter.on_log_cleared();

        // Assert
        let received: Vec<Notification> = notification_rx.try_iter().collect();
        assert_eq!(
            received,
            vec![
                Notification::MotionStarted { destination: 4 },
                Notification::DirectionChanged { glyph: "↑".to_string(), color: ColorHint::Yellow },
                Notification::FloorChanged { floor: 2 },
                Notification::MotionEnded { floor: 2 },
                Notification::LogAppended { text: "• hello".to_string() },
                Notification::LogCleared,
            ]
        );
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line(" 5 \n"), Input::Command(Command::RequestFloor(5)));
        assert_eq!(parse_line("0"), Input::Command(Command::RequestFloor(0)));
        assert_eq!(parse_line("STOP"), Input::Command(Command::EmergencyStop));
        assert_eq!(parse_line("clear"), Input::Command(Command::ClearLog));
        assert_eq!(parse_line("exit"), Input::Exit);
        assert_eq!(parse_line(""), Input::Empty);
        assert_eq!(parse_line("up please"), Input::Unknown);
        assert_eq!(parse_line("300"), Input::Command(Command::RequestFloor(300)));
        assert_eq!(parse_line("99999999999"), Input::Command(Command::RequestFloor(u32::MAX)));
        assert_eq!(parse_line("-1"), Input::Unknown);
    }

    #[test]
    fn test_input_reader_forwards_commands() {
        // Arrange
        let (command_tx, command_rx) = unbounded::<Command>();
        let (terminate_tx, terminate_rx) = unbounded::<()>();
        let reader = InputReader::new(command_tx, terminate_tx);

        // Act
        reader.run(Cursor::new("3\nstop\n\nclear\nexit\n7\n"));

        // Assert
        let commands: Vec<Command> = command_rx.try_iter().collect();
        assert_eq!(
            commands,
            vec![Command::RequestFloor(3), Command::EmergencyStop, Command::ClearLog]
        );
        assert_eq!(terminate_rx.try_recv(), Ok(()));
    }

    #[test]
    fn test_input_reader_eof_terminates() {
        // Arrange
        let (command_tx, _command_rx) = unbounded::<Command>();
        let (terminate_tx, terminate_rx) = unbounded::<()>();

        // Act
        InputReader::new(command_tx, terminate_tx).run(Cursor::new("2\n"));

        // Assert
        assert_eq!(terminate_rx.try_recv(), Ok(()));
    }

    #[test]
    fn test_display_buttons() {
        // Purpose: The destination button is highlighted for the duration of the ride

        // Arrange
        let building = Building::new(4).unwrap();
        let mut display = TerminalDisplay::new(&building, 6, OutputFormat::Text);

        // Act
        display.apply(&Notification::MotionStarted { destination: 3 });
        let during = display.button(3);
        display.apply(&Notification::DirectionChanged { glyph: Up.glyph().to_string(), color: Up.color() });
        display.apply(&Notification::FloorChanged { floor: 2 });
        let panel = display.panel();
        display.apply(&Notification::FloorChanged { floor: 3 });
        display.apply(&Notification::MotionEnded { floor: 3 });

        // Assert
        assert_eq!(during, Some(ButtonAppearance::Active));
        assert_eq!(display.button(3), Some(ButtonAppearance::Rest));
        assert_eq!(display.button(5), None);
        assert_eq!(display.floor(), 3);
        assert_eq!(display.glyph(), "↑");
        assert_eq!(panel, "▣ 2 ▣  ↑ (#e8e84a)  [4] [3*] [2] [1]");
    }

    #[test]
    fn test_display_scrollback() {
        // Arrange
        let building = Building::new(4).unwrap();
        let mut display = TerminalDisplay::new(&building, 2, OutputFormat::Text);

        // Act
        for text in ["• a", "• b", "• c"] {
            display.apply(&Notification::LogAppended { text: text.to_string() });
        }
        let before_clear: Vec<String> = display.scrollback().cloned().collect();
        display.apply(&Notification::LogCleared);

        // Assert
        assert_eq!(before_clear, vec!["• b".to_string(), "• c".to_string()]);
        assert_eq!(display.scrollback().count(), 0);
    }

    #[test]
    fn test_display_json() {
        // Arrange
        let building = Building::new(4).unwrap();
        let display = TerminalDisplay::new(&building, 6, OutputFormat::Json);

        // Act
        let line = display.render(&Notification::FloorChanged { floor: 2 }).unwrap();

        // Assert
        assert_eq!(line, r#"{"event":"floorChanged","floor":2}"#);
    }

    #[test]
    fn test_display_run_ends_with_controller() {
        // Arrange
        let building = Building::new(4).unwrap();
        let display = TerminalDisplay::new(&building, 6, OutputFormat::Text);
        let (notification_tx, notification_rx) = unbounded::<Notification>();
        notification_tx
            .send(Notification::LogAppended { text: "• Moving to floor 2...".to_string() })
            .unwrap();
        drop(notification_tx);
        let mut out: Vec<u8> = Vec::new();

        // Act
        display.run(notification_rx, &mut out);

        // Assert
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Ready to go up!"));
        assert!(output.ends_with("• Moving to floor 2...\n"));
    }
}
