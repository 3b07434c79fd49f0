mod tests {
    use dmx_chase_core::{PatternBus, ShiftPins, ShiftRegisterBus};

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum PinEvent {
        Data(bool),
        ShiftClock(bool),
        Latch(bool),
    }

    #[derive(Default)]
    struct RecordingPins {
        events: Vec<PinEvent>,
    }

    impl ShiftPins for &mut RecordingPins {
        fn set_data(&mut self, high: bool) {
            self.events.push(PinEvent::Data(high));
        }

        fn set_shift_clock(&mut self, high: bool) {
            self.events.push(PinEvent::ShiftClock(high));
        }

        fn set_latch(&mut self, high: bool) {
            self.events.push(PinEvent::Latch(high));
        }
    }

    fn data_bits(events: &[PinEvent]) -> Vec<bool> {
        events
            .iter()
            .filter_map(|event| match event {
                PinEvent::Data(high) => Some(*high),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_writes_eight_bits_msb_first() {
        let mut pins = RecordingPins::default();
        let mut bus = ShiftRegisterBus::new(&mut pins);

        bus.write(0b101010);

        // 6-bit patterns still shift a full byte: two leading zeros.
        assert_eq!(
            data_bits(&pins.events),
            vec![false, false, true, false, true, false, true, false]
        );
    }

    #[test]
    fn test_latches_once_per_value() {
        let mut pins = RecordingPins::default();
        let mut bus = ShiftRegisterBus::new(&mut pins);

        bus.write(0b111111);

        assert_eq!(pins.events.first(), Some(&PinEvent::Latch(false)));
        assert_eq!(pins.events.last(), Some(&PinEvent::Latch(true)));
        let latches = pins
            .events
            .iter()
            .filter(|event| matches!(event, PinEvent::Latch(_)))
            .count();
        assert_eq!(latches, 2);
    }

    #[test]
    fn test_pulses_shift_clock_per_bit() {
        let mut pins = RecordingPins::default();
        let mut bus = ShiftRegisterBus::new(&mut pins);

        bus.write(0);

        // Each bit: data, clock high, clock low.
        let mut clock_pulses = 0;
        let mut i = 0;
        while i + 1 < pins.events.len() {
            if pins.events[i] == PinEvent::ShiftClock(true)
                && pins.events[i + 1] == PinEvent::ShiftClock(false)
            {
                clock_pulses += 1;
                i += 2;
            } else {
                i += 1;
            }
        }
        assert_eq!(clock_pulses, 8);
    }
}
