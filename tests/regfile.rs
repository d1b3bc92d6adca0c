//! Register file and hazard scoreboard unit tests (invariants P1, P2).

use pipe5sim::regfile::RegisterFile;

#[test]
fn fresh_register_file_is_all_valid_unhazarded() {
    let rf = RegisterFile::new();
    for i in 0..16 {
        assert!(rf.scoreboard.is_valid(i));
    }
    assert_eq!(rf.scoreboard.hazardous_count(), 0);
}

#[test]
fn reserve_clears_valid_without_marking_hazard() {
    let mut rf = RegisterFile::new();
    rf.scoreboard.reserve(3);
    assert!(!rf.scoreboard.is_valid(3));
    assert_eq!(rf.scoreboard.hazardous_count(), 0);
}

#[test]
fn mark_hazard_is_idempotent() {
    let mut rf = RegisterFile::new();
    rf.scoreboard.reserve(3);
    rf.scoreboard.mark_hazard(3);
    rf.scoreboard.mark_hazard(3);
    rf.scoreboard.mark_hazard(3);
    // P1: the aggregate counter must equal the number of hazardous
    // registers, not the number of times mark_hazard was called.
    assert_eq!(rf.scoreboard.hazardous_count(), 1);
}

#[test]
fn write_releases_hazard_and_restores_validity() {
    let mut rf = RegisterFile::new();
    rf.scoreboard.reserve(3);
    rf.scoreboard.mark_hazard(3);
    assert_eq!(rf.scoreboard.hazardous_count(), 1);

    rf.write(3, 42);

    // P2: hazard(i) implies !valid(i); once hazard clears, valid must hold.
    assert!(rf.scoreboard.is_valid(3));
    assert_eq!(rf.scoreboard.hazardous_count(), 0);
    assert_eq!(rf.read(3), 42);
}

#[test]
fn release_without_prior_hazard_does_not_underflow_counter() {
    let mut rf = RegisterFile::new();
    rf.scoreboard.reserve(5);
    rf.write(5, 7);
    assert_eq!(rf.scoreboard.hazardous_count(), 0);
    assert!(rf.scoreboard.is_valid(5));
}

#[test]
fn independent_registers_track_hazards_separately() {
    let mut rf = RegisterFile::new();
    rf.scoreboard.reserve(1);
    rf.scoreboard.reserve(2);
    rf.scoreboard.mark_hazard(1);
    rf.scoreboard.mark_hazard(2);
    assert_eq!(rf.scoreboard.hazardous_count(), 2);

    rf.write(1, 10);
    assert_eq!(rf.scoreboard.hazardous_count(), 1);
    assert!(rf.scoreboard.is_valid(1));
    assert!(!rf.scoreboard.is_valid(2));
}
