use crossbeam_channel::bounded;
use options_core::{
    InboundMsg, MainLoop, OptionsAction, OptionsState, OptionsStore, OutboundMsg, TabSelector,
    INBOUND_CAP, OUTBOUND_CAP,
};
use std::time::Duration;

fn recv_snapshot(rx: &crossbeam_channel::Receiver<OutboundMsg>) -> (u64, OptionsState) {
    match rx.recv_timeout(Duration::from_secs(2)) {
        Ok(OutboundMsg::Snapshot { revision, state }) => (revision, *state),
        Err(e) => panic!("timeout waiting for snapshot: {e:?}"),
    }
}

#[test]
fn tick_drains_queue_and_publishes_one_snapshot() {
    let (in_tx, in_rx) = bounded(INBOUND_CAP);
    let (out_tx, out_rx) = bounded(OUTBOUND_CAP);
    let mut main_loop = MainLoop::new(in_rx, out_tx);

    main_loop.tick();
    assert!(out_rx.try_recv().is_err(), "idle tick publishes nothing");

    for action in [
        OptionsAction::SetSteps(20),
        OptionsAction::SetSeed(11),
        OptionsAction::SetActiveTab(TabSelector::Name("img2img".into())),
    ] {
        in_tx.send(InboundMsg::Dispatch { action }).unwrap();
    }
    main_loop.tick();

    let (revision, state) = recv_snapshot(&out_rx);
    assert_eq!(revision, 3);
    assert_eq!(state.steps, 20);
    assert_eq!(state.seed, 11);
    assert!(!state.should_randomize_seed);
    assert_eq!(state.active_tab, 1);
    assert!(out_rx.try_recv().is_err(), "one snapshot per tick");

    in_tx.send(InboundMsg::RequestSnapshot).unwrap();
    main_loop.tick();
    let (revision, again) = recv_snapshot(&out_rx);
    assert_eq!(revision, 3);
    assert_eq!(again, state);
}

#[test]
fn run_applies_until_senders_drop() {
    let (in_tx, in_rx) = bounded(INBOUND_CAP);
    let (out_tx, out_rx) = bounded(OUTBOUND_CAP);

    let mut start = OptionsState::default();
    start.prompt = "kept".into();
    let mut main_loop = MainLoop::with_store(OptionsStore::with_state(start), in_rx, out_tx);

    let worker = std::thread::spawn(move || {
        main_loop.run();
        main_loop.into_store()
    });

    in_tx
        .send(InboundMsg::Dispatch {
            action: OptionsAction::SetWidth(1024),
        })
        .unwrap();
    in_tx
        .send(InboundMsg::Dispatch {
            action: OptionsAction::ResetSeed,
        })
        .unwrap();
    drop(in_tx);

    let store = worker.join().expect("main loop thread");
    let (revision, state) = recv_snapshot(&out_rx);
    assert_eq!(revision, 2);
    assert_eq!(state.width, 1024);
    assert_eq!(state.seed, -1);
    assert_eq!(state.prompt, "kept");
    assert_eq!(store.state(), &state);
}

#[test]
fn full_outbound_drops_snapshots_without_blocking() {
    let (in_tx, in_rx) = bounded(INBOUND_CAP);
    let (out_tx, out_rx) = bounded(1);
    let mut main_loop = MainLoop::new(in_rx, out_tx);

    for width in [100, 200] {
        in_tx
            .send(InboundMsg::Dispatch {
                action: OptionsAction::SetWidth(width),
            })
            .unwrap();
        main_loop.tick();
    }

    let (_, first) = recv_snapshot(&out_rx);
    assert_eq!(first.width, 100);
    assert!(out_rx.try_recv().is_err());
    assert_eq!(main_loop.store().state().width, 200);
}
