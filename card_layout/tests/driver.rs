use std::cell::RefCell;
use std::rc::Rc;

use card_layout::driver::{attach, ManualResizeSource, ResizeSource};
use card_layout::{
    card_height, solve_battle, solve_dual, BattleCounts, BattleLayout, BattleZoneConfig,
    ContainerSize, DualLayout, DualZoneConfig, Tuning, ZoneConfig,
};

fn battle_config(counts: BattleCounts) -> BattleZoneConfig {
    BattleZoneConfig {
        counts,
        fixed_height: 72.0,
        ..BattleZoneConfig::default()
    }
}

fn standard_counts() -> BattleCounts {
    BattleCounts {
        player_hand: 7,
        opponent_hand: 5,
        player_lands: 4,
        player_nonlands: 3,
        opponent_lands: 3,
        opponent_nonlands: 2,
    }
}

fn record<L: Clone + 'static>() -> (Rc<RefCell<Vec<L>>>, impl FnMut(&L) + 'static) {
    let published = Rc::new(RefCell::new(Vec::new()));
    let published_2 = Rc::clone(&published);
    (published, move |layout: &L| published_2.borrow_mut().push(layout.clone()))
}

#[test]
fn battle_board_follows_resizes() {
    let source = Rc::new(ManualResizeSource::new(ContainerSize::new(1200.0, 800.0)));
    let config = battle_config(standard_counts());
    let handle = attach(source.clone(), move |size| {
        solve_battle(&config, size, &Tuning::default())
    });
    assert_eq!(handle.current_layout().row_height, 121);

    let (published, callback) = record::<BattleLayout>();
    handle.on_change(callback);

    source.resize(ContainerSize::new(1200.0, 350.0));
    assert_eq!(published.borrow().len(), 1);
    let layout = handle.current_layout();
    assert_eq!(layout.row_height, 46);
    for (_, zone) in layout.zones() {
        assert!(zone.height <= 46);
        assert_eq!(zone.height, card_height(zone.width));
    }

    // 351 - 72 = 279, still 46 per row
    source.resize(ContainerSize::new(1200.0, 351.0));
    assert_eq!(published.borrow().len(), 1);
    // Same size again
    source.resize(ContainerSize::new(1200.0, 351.0));
    assert_eq!(published.borrow().len(), 1);

    source.resize(ContainerSize::new(1200.0, 800.0));
    assert_eq!(published.borrow().len(), 2);
    assert_eq!(published.borrow()[1], handle.current_layout());
}

#[test]
fn count_change_recomputes_without_resize() {
    let source = Rc::new(ManualResizeSource::new(ContainerSize::new(900.0, 800.0)));
    let config = battle_config(standard_counts());
    let handle = attach(source.clone(), move |size| {
        solve_battle(&config, size, &Tuning::default())
    });
    let (published, callback) = record::<BattleLayout>();
    handle.on_change(callback);

    let mut counts = standard_counts();
    counts.player_hand = 14;
    let config = battle_config(counts);
    handle.set_solver(move |size| solve_battle(&config, size, &Tuning::default()));

    assert_eq!(published.borrow().len(), 1);
    assert!(handle.current_layout().player_hand_gap < 0);
    assert_eq!(handle.current_layout().player_hand.columns, 14);
}

#[test]
fn detach_releases_observer() {
    let source = Rc::new(ManualResizeSource::new(ContainerSize::new(800.0, 600.0)));
    let handle = attach(source.clone(), |size| size.width as u32);
    assert_eq!(source.observer_count(), 1);
    assert!(handle.is_attached());
    handle.detach();
    assert_eq!(source.observer_count(), 0);

    {
        let _handle = attach(source.clone(), |size| size.width as u32);
        assert_eq!(source.observer_count(), 1);
    }
    assert_eq!(source.observer_count(), 0);
    // Nothing is listening anymore
    source.resize(ContainerSize::new(10.0, 10.0));
}

#[test]
fn reattach_moves_to_new_source() {
    let first = Rc::new(ManualResizeSource::new(ContainerSize::new(800.0, 600.0)));
    let second = Rc::new(ManualResizeSource::new(ContainerSize::new(400.0, 300.0)));
    let mut handle = attach(first.clone(), |size| size.width as u32);
    let (published, callback) = record::<u32>();
    handle.on_change(callback);

    handle.reattach(second.clone());
    assert_eq!(first.observer_count(), 0);
    assert_eq!(second.observer_count(), 1);
    assert_eq!(handle.current_layout(), 400);
    assert_eq!(*published.borrow(), vec![400]);

    first.resize(ContainerSize::new(1000.0, 600.0));
    assert_eq!(handle.current_layout(), 400);
    second.resize(ContainerSize::new(500.0, 300.0));
    assert_eq!(handle.current_layout(), 500);
    assert_eq!(handle.container_size(), second.content_size());
}

#[test]
fn callbacks_can_read_the_handle() {
    let source = Rc::new(ManualResizeSource::new(ContainerSize::new(1000.0, 480.0)));
    let zone = ZoneConfig::default();
    let config = DualZoneConfig {
        top: zone.with_count(0),
        bottom: zone.with_count(10),
        fixed_height: 40.0,
    };
    let handle = Rc::new(attach(source.clone(), move |size| {
        solve_dual(&config, size, &Tuning::default())
    }));
    let seen: Rc<RefCell<Vec<DualLayout>>> = Rc::new(RefCell::new(Vec::new()));
    let (weak, seen_2) = (Rc::downgrade(&handle), Rc::clone(&seen));
    handle.on_change(move |layout| {
        if let Some(handle) = weak.upgrade() {
            assert_eq!(handle.current_layout(), *layout);
            seen_2.borrow_mut().push(*layout);
        }
    });

    source.resize(ContainerSize::new(600.0, 480.0));
    assert_eq!(seen.borrow().len(), 1);
    // The empty top zone keeps its placeholder, the pool takes the whole height
    assert_eq!(seen.borrow()[0].top.rows, 1);
    assert_eq!(seen.borrow()[0].top.width, zone.max_card_width);
}

#[test]
fn solver_change_inside_callback_reaches_every_callback() {
    let source = Rc::new(ManualResizeSource::new(ContainerSize::new(100.0, 100.0)));
    let handle = Rc::new(attach(source.clone(), |size| size.width as u32));

    let weak = Rc::downgrade(&handle);
    let switched = Rc::new(std::cell::Cell::new(false));
    let switched_2 = Rc::clone(&switched);
    handle.on_change(move |_| {
        if switched_2.replace(true) {
            return;
        }
        if let Some(handle) = weak.upgrade() {
            handle.set_solver(|size| size.width as u32 + 1000);
        }
    });
    let (published, callback) = record::<u32>();
    handle.on_change(callback);

    source.resize(ContainerSize::new(200.0, 100.0));
    assert_eq!(handle.current_layout(), 1200);
    // The later callback never sees the layout that was replaced while publishing
    assert_eq!(*published.borrow(), vec![1200]);

    source.resize(ContainerSize::new(300.0, 100.0));
    assert_eq!(*published.borrow(), vec![1200, 1300]);
}
