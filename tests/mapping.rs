mod tests {
    use dmx_chase_core::{
        BrightnessCommand, FOOTPRINT, PatternCommand, chase_speed, map_window,
    };

    fn window(bytes: &[(usize, u8)]) -> [u8; FOOTPRINT] {
        let mut window = [0u8; FOOTPRINT];
        for &(offset, value) in bytes {
            window[offset] = value;
        }
        window
    }

    #[test]
    fn test_master_zero_forces_everything_off() {
        // All other channels at full blast must not matter.
        let mut w = [255u8; FOOTPRINT];
        w[0] = 0;
        let commands = map_window(&w);
        assert_eq!(commands.brightness, BrightnessCommand::default());
        assert_eq!(commands.pattern, PatternCommand::Manual(0));
    }

    #[test]
    fn test_master_zero_overrides_chase_selector() {
        let w = window(&[(0, 0), (3, 200)]);
        assert_eq!(map_window(&w).pattern, PatternCommand::Manual(0));
    }

    #[test]
    fn test_brightness_scaling_is_floor_division() {
        for &value in &[0u8, 1, 254, 255] {
            for &master in &[1u8, 254, 255] {
                let w = window(&[(0, master), (1, value), (2, value)]);
                let expected = (u16::from(value) * u16::from(master) / 255) as u8;
                let commands = map_window(&w);
                assert_eq!(commands.brightness.center, expected);
                assert_eq!(commands.brightness.box_leds, expected);
            }
        }
    }

    #[test]
    fn test_full_master_passes_duties_through() {
        let w = window(&[(0, 255), (1, 128), (2, 64)]);
        let commands = map_window(&w);
        assert_eq!(commands.brightness.center, 128);
        assert_eq!(commands.brightness.box_leds, 64);
    }

    #[test]
    fn test_chase_speed_range() {
        assert_eq!(chase_speed(255), 2);
        assert_eq!(chase_speed(1), 20);
        for selector in 1..=255u8 {
            let speed = chase_speed(selector);
            assert!((2..=20).contains(&speed), "selector {selector} -> {speed}");
        }
    }

    #[test]
    fn test_chase_speed_is_monotonic() {
        for selector in 1..255u8 {
            assert!(chase_speed(selector) >= chase_speed(selector + 1));
        }
    }

    #[test]
    fn test_nonzero_selector_selects_chase() {
        // Pattern bit channels are disregarded in chase mode.
        let w = window(&[(0, 255), (3, 255), (4, 255), (5, 255)]);
        assert_eq!(map_window(&w).pattern, PatternCommand::Chase { speed: 2 });
    }

    #[test]
    fn test_manual_mask_thresholds_at_high_bit() {
        // 0-127 = off, 128-255 = on.
        let w = window(&[(0, 255), (4, 127), (5, 128), (6, 0), (7, 255), (8, 1), (9, 254)]);
        assert_eq!(map_window(&w).pattern, PatternCommand::Manual(0b010101));
    }

    #[test]
    fn test_manual_mask_is_msb_first() {
        let w = window(&[
            (0, 255),
            (1, 128),
            (2, 64),
            (4, 255),
            (6, 255),
            (8, 255),
        ]);
        let commands = map_window(&w);
        assert_eq!(commands.brightness.center, 128);
        assert_eq!(commands.brightness.box_leds, 64);
        assert_eq!(commands.pattern, PatternCommand::Manual(0b101010));
    }
}
