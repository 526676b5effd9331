/*
 * Unit tests for the shared data structures
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_building_rejects_zero_floors
 * - test_building_contains
 * - test_building_floor_conversion
 * - test_direction_towards
 * - test_direction_indicator
 * - test_elevator_state_initial
 * - test_notification_json
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod structs_tests {
    use crate::shared::Direction::{Down, Idle, Stopped, Up};
    use crate::shared::{Building, ColorHint, ElevatorState, Notification};

    #[test]
    fn test_building_rejects_zero_floors() {
        // Act
        let building = Building::new(0);

        // Assert
        assert!(building.is_err());
    }

    #[test]
    fn test_building_contains() {
        // Arrange
        let building = Building::new(8).unwrap();

        // Act & Assert
        assert!(!building.contains(0));
        assert!(building.contains(1));
        assert!(building.contains(8));
        assert!(!building.contains(9));
        assert_eq!(building.floors().collect::<Vec<u8>>(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_building_floor_conversion() {
        // Arrange
        let building = Building::new(8).unwrap();

        // Act & Assert
        assert_eq!(building.floor(5), Some(5));
        assert_eq!(building.floor(0), None);
        assert_eq!(building.floor(9), None);
        assert_eq!(building.floor(300), None);
        assert_eq!(building.floor(u32::MAX), None);
    }

    #[test]
    fn test_direction_towards() {
        assert_eq!(crate::shared::Direction::towards(1, 5), Some(Up));
        assert_eq!(crate::shared::Direction::towards(5, 1), Some(Down));
        assert_eq!(crate::shared::Direction::towards(3, 3), None);
    }

    #[test]
    fn test_direction_indicator() {
        // Purpose: Every direction has its own glyph, stop uses the alert color
        assert_eq!(Up.color(), ColorHint::Yellow);
        assert_eq!(Down.color(), ColorHint::Red);
        assert_eq!(Stopped.color(), ColorHint::Alert);
        assert_eq!(Idle.color(), ColorHint::Neutral);
        assert_ne!(Stopped.glyph(), Idle.glyph());
        assert_ne!(Up.glyph(), Down.glyph());
    }

    #[test]
    fn test_elevator_state_initial() {
        // Act
        let state = ElevatorState::new();

        // Assert
        assert_eq!(state.current_floor, 1);
        assert_eq!(state.is_moving, false);
        assert_eq!(state.direction, Idle);
    }

    #[test]
    fn test_notification_json() {
        // Arrange
        let notification = Notification::DirectionChanged {
            glyph: Up.glyph().to_string(),
            color: Up.color(),
        };

        // Act
        let json = serde_json::to_value(&notification).unwrap();

        // Assert
        assert_eq!(json["event"], "directionChanged");
        assert_eq!(json["glyph"], "↑");
        assert_eq!(json["color"], "yellow");
    }
}
