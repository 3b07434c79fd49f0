mod tests {
    use dmx_chase_core::{
        ChannelFrame, DecodeError, DecoderConfig, DutyOutput, Instant, LightController,
        PatternBus, Sequencer, SignalRequest, SignalTrigger, TriggerFull,
    };

    const BASE: u16 = 36;

    /// Duty sink; the controller's own readback is checked instead.
    struct NullPwm;

    impl DutyOutput for NullPwm {
        fn set_duty(&mut self, _duty: u8) {}
    }

    #[derive(Default)]
    struct RecordingBus {
        writes: Vec<u8>,
    }

    impl PatternBus for RecordingBus {
        fn write(&mut self, pattern: u8) {
            self.writes.push(pattern);
        }
    }

    fn frame_bytes(window: &[u8]) -> Vec<u8> {
        let mut data = vec![0u8; 513];
        data[BASE as usize..BASE as usize + window.len()].copy_from_slice(window);
        data
    }

    fn controller(sequencer: &Sequencer) -> LightController<'_, NullPwm, NullPwm> {
        let config = DecoderConfig {
            base_channel: BASE,
            verify_channel: None,
        };
        LightController::new(config, sequencer, NullPwm, NullPwm)
    }

    #[test]
    fn test_manual_frame_drives_duties_and_pattern() {
        let sequencer = Sequencer::new();
        let mut controller = controller(&sequencer);
        let mut bus = RecordingBus::default();

        let data = frame_bytes(&[255, 128, 64, 0, 255, 0, 255, 0, 255, 0]);
        let applied = controller
            .handle_frame(&ChannelFrame::new(&data), Instant::from_millis(0))
            .unwrap();
        assert!(applied);
        assert_eq!(controller.center_duty(), 128);
        assert_eq!(controller.box_duty(), 64);

        sequencer.tick(&mut bus);
        assert_eq!(bus.writes, vec![0b101010]);
    }

    #[test]
    fn test_duplicate_frame_does_not_reapply() {
        let sequencer = Sequencer::new();
        let mut controller = controller(&sequencer);

        let data = frame_bytes(&[255, 128, 64, 0, 255, 0, 255, 0, 255, 0]);
        assert!(
            controller
                .handle_frame(&ChannelFrame::new(&data), Instant::from_millis(0))
                .unwrap()
        );
        assert!(
            !controller
                .handle_frame(&ChannelFrame::new(&data), Instant::from_millis(40))
                .unwrap()
        );
    }

    #[test]
    fn test_chase_frame_sets_speed_and_releases_pattern() {
        let sequencer = Sequencer::new();
        sequencer.on();
        let mut controller = controller(&sequencer);
        let mut bus = RecordingBus::default();

        let data = frame_bytes(&[255, 0, 0, 255, 0, 0, 0, 0, 0, 0]);
        controller
            .handle_frame(&ChannelFrame::new(&data), Instant::from_millis(0))
            .unwrap();
        assert_eq!(sequencer.speed(), 2);

        sequencer.tick(&mut bus);
        assert_eq!(bus.writes, vec![0b100000]);
    }

    #[test]
    fn test_master_to_zero_mid_chase_snaps_everything_off() {
        let sequencer = Sequencer::new();
        sequencer.on();
        let mut controller = controller(&sequencer);
        let mut bus = RecordingBus::default();

        let data = frame_bytes(&[255, 200, 200, 255, 0, 0, 0, 0, 0, 0]);
        controller
            .handle_frame(&ChannelFrame::new(&data), Instant::from_millis(0))
            .unwrap();
        sequencer.tick(&mut bus);
        assert!(controller.center_duty() > 0);

        // Master drops to zero; chase selector and pattern bits unchanged.
        let data = frame_bytes(&[0, 200, 200, 255, 0, 0, 0, 0, 0, 0]);
        controller
            .handle_frame(&ChannelFrame::new(&data), Instant::from_millis(40))
            .unwrap();

        assert_eq!(controller.center_duty(), 0);
        assert_eq!(controller.box_duty(), 0);
        sequencer.tick(&mut bus);
        assert_eq!(*bus.writes.last().unwrap(), 0);

        // The chase stays off, it is not merely dimmed.
        for _ in 0..50 {
            sequencer.tick(&mut bus);
        }
        assert_eq!(*bus.writes.last().unwrap(), 0);
    }

    #[test]
    fn test_rejected_frame_leaves_outputs_alone() {
        let sequencer = Sequencer::new();
        let mut controller = controller(&sequencer);

        let data = frame_bytes(&[255, 128, 64, 0, 0, 0, 0, 0, 0, 0]);
        controller
            .handle_frame(&ChannelFrame::new(&data), Instant::from_millis(0))
            .unwrap();

        let mut bad = frame_bytes(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        bad[0] = 0x17;
        let result = controller.handle_frame(&ChannelFrame::new(&bad), Instant::from_millis(40));
        assert_eq!(result, Err(DecodeError::MalformedFrame { start_code: 0x17 }));
        assert_eq!(controller.center_duty(), 128);
        assert_eq!(controller.box_duty(), 64);
    }

    #[test]
    fn test_trigger_queue_dispatches_in_order() {
        let sequencer = Sequencer::new();
        let trigger: SignalTrigger<4> = SignalTrigger::new();

        trigger.request_raw(3).unwrap();
        trigger.dispatch(&sequencer);
        assert!(!sequencer.signal_done());

        trigger.request_raw(0).unwrap();
        trigger.dispatch(&sequencer);
        assert!(sequencer.signal_done());
    }

    #[test]
    fn test_trigger_queue_rejects_overflow() {
        let _sequencer = Sequencer::new();
        let trigger: SignalTrigger<2> = SignalTrigger::new();

        trigger.request(SignalRequest::Clear).unwrap();
        trigger.request(SignalRequest::Clear).unwrap();
        assert_eq!(
            trigger.request(SignalRequest::Clear),
            Err(TriggerFull(SignalRequest::Clear))
        );
    }

    #[test]
    fn test_trigger_ignores_unknown_signal_numbers() {
        let sequencer = Sequencer::new();
        let trigger: SignalTrigger<4> = SignalTrigger::new();

        trigger.request_raw(42).unwrap();
        trigger.dispatch(&sequencer);
        assert!(sequencer.signal_done());
    }
}
