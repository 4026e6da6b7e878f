//! Integration tests for the concrete scenarios of the design spec
//! (`N = 1000`, `size_of::<T>() = 8`), end-to-end against the public
//! `Arena<f64, N>` surface rather than any single module's internals.

use boundary_arena::Arena;

fn word_at(arena: &Arena<f64, 1000>, i: usize) -> i32 {
  arena.word_at(i)
}

#[test]
fn scenario_1_fresh_arena() {
  let arena = Arena::<f64, 1000>::new().unwrap();
  assert_eq!(word_at(&arena, 0), 992);
  assert_eq!(word_at(&arena, 996), 992);
  assert!(arena.is_valid());
}

#[test]
fn scenario_2_allocate_splits_the_arena() {
  let mut arena = Arena::<f64, 1000>::new().unwrap();
  let _p = arena.allocate(50).unwrap();
  assert_eq!(word_at(&arena, 0), -400);
  assert_eq!(word_at(&arena, 408), 584);
  assert_eq!(word_at(&arena, 996), 584);
  assert!(arena.is_valid());
}

#[test]
fn scenario_3_allocate_then_deallocate_round_trips() {
  let mut arena = Arena::<f64, 1000>::new().unwrap();
  let p = arena.allocate(5).unwrap();
  arena.deallocate(p).unwrap();
  assert_eq!(word_at(&arena, 0), 992);
  assert_eq!(word_at(&arena, 996), 992);
  assert!(arena.is_valid());
}

#[test]
fn scenario_4_backward_coalesce_absorbs_freed_first_block() {
  let mut arena = Arena::<f64, 1000>::new().unwrap();
  let b = arena.allocate(5).unwrap();
  let _c = arena.allocate(1).unwrap();
  arena.deallocate(b).unwrap();
  assert_eq!(word_at(&arena, 0), 40);
  assert_eq!(word_at(&arena, 48), -8);
  assert_eq!(word_at(&arena, 64), 928);
  assert!(arena.is_valid());
}

#[test]
fn scenario_5_two_sided_coalesce() {
  let mut arena = Arena::<f64, 1000>::new().unwrap();
  let b = arena.allocate(2).unwrap();
  let _mid = arena.allocate(2).unwrap();
  let c = arena.allocate(2).unwrap();
  arena.deallocate(b).unwrap();
  arena.deallocate(c).unwrap();
  assert_eq!(word_at(&arena, 0), 16);
  assert_eq!(word_at(&arena, 24), -16);
  assert_eq!(word_at(&arena, 48), 944);
  assert!(arena.is_valid());
}

#[test]
fn scenario_6_full_coalesce_restores_fresh_state() {
  let mut arena = Arena::<f64, 1000>::new().unwrap();
  let b = arena.allocate(2).unwrap();
  let c = arena.allocate(2).unwrap();
  let d = arena.allocate(2).unwrap();
  arena.deallocate(b).unwrap();
  arena.deallocate(d).unwrap();
  arena.deallocate(c).unwrap();
  assert_eq!(word_at(&arena, 0), 992);
  assert_eq!(word_at(&arena, 996), 992);
  assert!(arena.is_valid());
}

#[test]
fn scenario_7_two_allocations_no_free() {
  let mut arena = Arena::<f64, 1000>::new().unwrap();
  let _a = arena.allocate(3).unwrap();
  let _b = arena.allocate(2).unwrap();
  assert_eq!(word_at(&arena, 0), -24);
  assert_eq!(word_at(&arena, 32), -16);
  assert_eq!(word_at(&arena, 56), 936);
  assert!(arena.is_valid());
}

#[test]
fn allocate_exact_remaining_capacity_consumes_the_arena() {
  let mut arena = Arena::<f64, 1000>::new().unwrap();
  // n * 8 == N - 8 == 992.
  let _p = arena.allocate(124).unwrap();
  assert!(arena.allocate(1).is_err());
  assert!(arena.is_valid());
}

#[test]
fn allocate_leaving_too_small_a_residual_does_not_split() {
  let mut arena = Arena::<f64, 1000>::new().unwrap();
  // n * 8 == N - 16 == 984: the 8 bytes left over in the 992-byte free
  // block aren't enough to host another block's sentinels and payload,
  // so the whole 992-byte block is handed over instead of splitting.
  let p = arena.allocate(123).unwrap();
  assert_eq!(word_at(&arena, 0), -992);
  arena.deallocate(p).unwrap();
  assert_eq!(word_at(&arena, 0), 992);
}

#[test]
fn deallocate_restores_fresh_state_when_only_one_block_is_busy() {
  let mut arena = Arena::<f64, 1000>::new().unwrap();
  let p = arena.allocate(124).unwrap();
  arena.deallocate(p).unwrap();
  assert_eq!(word_at(&arena, 0), 992);
  assert_eq!(word_at(&arena, 996), 992);
}

#[test]
fn construct_at_and_destroy_at_round_trip_through_the_arena() {
  let mut arena = Arena::<f64, 1000>::new().unwrap();
  let p = arena.allocate(1).unwrap();
  unsafe {
    arena.construct_at(p, 3.5);
    assert_eq!(*p, 3.5);
    arena.destroy_at(p);
  }
  arena.deallocate(p).unwrap();
  assert!(arena.is_valid());
}
