/// Integration tests for the Surface container: phase machine, reload,
/// teardown, scheduler coalescing and the animator hook.
use std::rc::Rc;

use lattice_core::{NodeIdentity, Rect, Size};
use lattice_foundation::{
    Animator, NoAnimation, ReconcileError, RemovalChoice, Surface, SurfacePhase,
};
use lattice_testing::{ManualScheduler, RecordingHost};
use lattice_ui::{AnyComponent, Image, VStack};

fn cell(label: &str) -> Image {
    Image::new(label, Size::new(100.0, 50.0))
}

fn column(labels: &'static [&'static str]) -> lattice_ui::Stack {
    let children: Vec<AnyComponent> = labels
        .iter()
        .map(|&l| Box::new(cell(l)) as AnyComponent)
        .collect();
    VStack(children)
}

fn surface() -> (Surface<RecordingHost>, RecordingHost, ManualScheduler) {
    let scheduler = ManualScheduler::new();
    let surface = Surface::new(Rc::new(scheduler.clone()));
    (surface, RecordingHost::new(), scheduler)
}

#[test]
fn test_phase_machine_idle_laid_out_reconciled() {
    let (mut surface, mut host, _) = surface();
    assert_eq!(surface.phase(), SurfacePhase::Idle);

    surface.set_root(column(&["a", "b"]));
    surface.set_bounds(Size::new(100.0, 600.0));
    surface.set_visible_rect(Rect::new(0.0, 0.0, 100.0, 600.0));
    assert_eq!(surface.phase(), SurfacePhase::Idle);

    surface.flush(&mut host, &mut NoAnimation).unwrap();
    assert_eq!(surface.phase(), SurfacePhase::Reconciled);
    assert_eq!(surface.stats().in_use, 2);

    // A bounds change drops back to laid-out territory and re-binds on
    // the next flush.
    surface.set_bounds(Size::new(200.0, 600.0));
    surface.flush(&mut host, &mut NoAnimation).unwrap();
    assert_eq!(surface.phase(), SurfacePhase::Reconciled);
}

#[test]
fn test_flush_without_invalidation_is_a_noop() {
    let (mut surface, mut host, _) = surface();
    surface.set_root(column(&["a", "b"]));
    surface.set_bounds(Size::new(100.0, 600.0));
    surface.set_visible_rect(Rect::new(0.0, 0.0, 100.0, 600.0));
    surface.flush(&mut host, &mut NoAnimation).unwrap();
    host.clear_ops();

    let report = surface.flush(&mut host, &mut NoAnimation).unwrap();
    assert!(report.is_incremental());
    assert_eq!(report.updated, 0);
    assert!(host.ops.is_empty());
}

#[test]
fn test_visible_rect_change_reconciles_without_relayout() {
    let (mut surface, mut host, _) = surface();
    surface.set_root(column(&["a", "b", "c", "d", "e", "f"]));
    surface.set_bounds(Size::new(100.0, 300.0));
    surface.set_visible_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
    let report = surface.flush(&mut host, &mut NoAnimation).unwrap();
    assert_eq!(report.created, 2);

    surface.set_visible_rect(Rect::new(0.0, 100.0, 100.0, 100.0));
    let report = surface.flush(&mut host, &mut NoAnimation).unwrap();
    assert_eq!(report.removed, 2);
    assert_eq!(report.created + report.reused, 2);
    assert_eq!(surface.stats().in_use, 2);
}

#[test]
fn test_reload_discards_pool_and_rebuilds_from_recycler() {
    let (mut surface, mut host, _) = surface();
    surface.set_root(column(&["a", "b"]));
    surface.set_bounds(Size::new(100.0, 300.0));
    surface.set_visible_rect(Rect::new(0.0, 0.0, 100.0, 300.0));
    surface.flush(&mut host, &mut NoAnimation).unwrap();
    assert_eq!(surface.stats().total_created, 2);

    surface.set_needs_reload();
    let report = surface.flush(&mut host, &mut NoAnimation).unwrap();
    // No updates across a reload: every binding is a create, served from
    // the recycled previous elements.
    assert_eq!(report.updated, 0);
    assert_eq!(report.reused, 2);
    assert_eq!(report.created, 0);
    assert_eq!(surface.stats().total_created, 2);
    assert_eq!(surface.stats().reuse_count, 2);
}

#[test]
fn test_teardown_releases_everything() {
    let (mut surface, mut host, _) = surface();
    surface.set_root(column(&["a", "b", "c", "d"]));
    surface.set_bounds(Size::new(100.0, 300.0));
    surface.set_visible_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
    surface.flush(&mut host, &mut NoAnimation).unwrap();

    surface.teardown(&mut host);
    assert_eq!(surface.phase(), SurfacePhase::Idle);
    assert_eq!(host.live_count(), 0);
    assert_eq!(surface.stats().in_use, 0);
    assert_eq!(surface.stats().in_pool, 0);

    // The root is kept: a later flush reactivates from scratch.
    let report = surface.flush(&mut host, &mut NoAnimation).unwrap();
    assert_eq!(report.created, 2);
    assert_eq!(surface.phase(), SurfacePhase::Reconciled);
}

#[test]
fn test_scheduler_requests_coalesce_until_flush() {
    let (mut surface, mut host, scheduler) = surface();
    surface.set_root(column(&["a"]));
    surface.set_bounds(Size::new(100.0, 100.0));
    surface.set_visible_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(scheduler.requested(), 1);

    surface.flush(&mut host, &mut NoAnimation).unwrap();
    surface.set_visible_rect(Rect::new(0.0, 10.0, 100.0, 100.0));
    surface.set_bounds(Size::new(120.0, 100.0));
    assert_eq!(scheduler.requested(), 2);
}

#[test]
fn test_collision_keeps_previous_frame_displayed() {
    let (mut surface, mut host, _) = surface();
    // Key 7 appears twice, 900pt apart: only one is visible initially.
    let items: Vec<AnyComponent> = vec![
        Box::new(lattice_ui::Keyed::new(7, cell("a"))),
        Box::new(lattice_ui::Space::new(100.0, 900.0)),
        Box::new(lattice_ui::Keyed::new(7, cell("dup"))),
    ];
    surface.set_root(VStack(items));
    surface.set_bounds(Size::new(100.0, 1000.0));
    surface.set_visible_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
    surface.flush(&mut host, &mut NoAnimation).unwrap();
    assert_eq!(surface.stats().in_use, 1);

    // Widening the viewport exposes both: the pass aborts, nothing moves.
    surface.set_visible_rect(Rect::new(0.0, 0.0, 100.0, 1000.0));
    let err = surface.flush(&mut host, &mut NoAnimation).unwrap_err();
    assert!(matches!(err, ReconcileError::IdentityCollision { .. }));
    assert_eq!(surface.stats().in_use, 1);
    assert_eq!(host.element(0).unwrap().frame, Rect::new(0.0, 0.0, 100.0, 50.0));
}

/// Animator that counts interceptions and offsets inserts downward.
#[derive(Default)]
struct SlideIn {
    inserts: usize,
    updates: usize,
    removes: usize,
}

impl Animator for SlideIn {
    fn on_insert(&mut self, _identity: &NodeIdentity, target: Rect) -> Option<Rect> {
        self.inserts += 1;
        Some(target.translate(0.0, 20.0))
    }

    fn on_update(&mut self, _identity: &NodeIdentity, _from: Rect, to: Rect) -> Rect {
        self.updates += 1;
        to
    }

    fn on_remove(&mut self, _identity: &NodeIdentity, _frame: Rect) -> RemovalChoice {
        self.removes += 1;
        RemovalChoice::Recycle
    }
}

#[test]
fn test_animator_called_once_per_operation() {
    let (mut surface, mut host, _) = surface();
    surface.set_root(column(&["a", "b", "c", "d"]));
    surface.set_bounds(Size::new(100.0, 300.0));
    surface.set_visible_rect(Rect::new(0.0, 0.0, 100.0, 100.0));

    let mut animator = SlideIn::default();
    surface.flush(&mut host, &mut animator).unwrap();
    assert_eq!((animator.inserts, animator.updates, animator.removes), (2, 0, 0));

    // Inserted elements start at the overridden frame.
    assert_eq!(host.element(0).unwrap().frame, Rect::new(0.0, 20.0, 100.0, 50.0));

    surface.set_visible_rect(Rect::new(0.0, 50.0, 100.0, 100.0));
    surface.flush(&mut host, &mut animator).unwrap();
    assert_eq!((animator.inserts, animator.updates, animator.removes), (3, 1, 1));
}

/// Animator that defers every removal.
struct DeferRemovals;

impl Animator for DeferRemovals {
    fn on_remove(&mut self, _identity: &NodeIdentity, _frame: Rect) -> RemovalChoice {
        RemovalChoice::Deferred
    }
}

#[test]
fn test_deferred_removal_detaches_only_on_finish() {
    let (mut surface, mut host, _) = surface();
    surface.set_root(column(&["a", "b", "c"]));
    surface.set_bounds(Size::new(100.0, 300.0));
    surface.set_visible_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
    surface.flush(&mut host, &mut NoAnimation).unwrap();

    surface.set_visible_rect(Rect::new(0.0, 50.0, 100.0, 100.0));
    let mut report = surface.flush(&mut host, &mut DeferRemovals).unwrap();
    assert_eq!(report.deferred.len(), 1);
    // The element is still alive and NOT available for reuse yet.
    assert_eq!(surface.stats().in_pool, 0);
    let deferred = report.deferred.pop().unwrap();
    let element = deferred.element;
    assert!(host.element(element).is_some());
    assert_eq!(host.element(element).unwrap().reset_count, 0);

    surface.finish_removal(&mut host, deferred);
    assert_eq!(surface.stats().in_pool, 1);
    assert_eq!(host.element(element).unwrap().reset_count, 1);
}
