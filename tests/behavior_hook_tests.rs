use std::cell::RefCell;
use std::rc::Rc;

use chart_drawings::api::{DrawingEngine, DrawingEngineConfig, DrawingModel, HandleStyle, ShapeBehavior};
use chart_drawings::core::{BaseInterval, TimeUnit, Viewport};
use chart_drawings::interaction::{HitTarget, PointerEvent};

/// Keeps a derived "mid" corner at the midpoint of "start" and "end",
/// the way a concrete shape type re-derives control points.
struct MidpointBehavior {
    calls: Rc<RefCell<Vec<String>>>,
}

impl ShapeBehavior for MidpointBehavior {
    fn update_segment(&mut self, _model: &mut DrawingModel, shape: usize) {
        self.calls.borrow_mut().push(format!("segment:{shape}"));
    }

    fn update_elements(&mut self, _model: &mut DrawingModel) {
        self.calls.borrow_mut().push("elements".to_owned());
    }

    fn customize_handle(&mut self, handle: &mut HandleStyle) {
        handle.radius_px = 9.0;
    }

    fn on_handle_dragged(&mut self, model: &mut DrawingModel, shape: usize, corner: &str) {
        self.calls.borrow_mut().push(format!("dragged:{corner}"));

        let endpoints = model.shapes().slot(shape).map(|slot| {
            (
                slot.get("start").copied(),
                slot.get("end").copied(),
                slot.get("mid").copied(),
            )
        });
        let Some((Some(start), Some(end), Some(mid))) = endpoints else {
            return;
        };

        let (sx, sy) = {
            let point = model.store().get(start).expect("start point");
            (point.value_x, point.value_y)
        };
        let (ex, ey) = {
            let point = model.store().get(end).expect("end point");
            (point.value_x, point.value_y)
        };

        if let Some(point) = model.store_mut().get_mut(mid) {
            point.value_x = (sx + ex) / 2.0;
            point.value_y = (sy + ey) / 2.0;
            point.value_y_working = point.value_y;
        }
    }
}

fn engine_with_midpoint() -> (DrawingEngine, Rc<RefCell<Vec<String>>>) {
    let config = DrawingEngineConfig::new(Viewport::new(1000, 500), 0.0, 1_000.0)
        .with_value_domain(0.0, 50.0)
        .with_base_interval(BaseInterval::new(TimeUnit::Millisecond, 1));
    let calls = Rc::new(RefCell::new(Vec::new()));
    let behavior = MidpointBehavior {
        calls: Rc::clone(&calls),
    };
    let engine = DrawingEngine::with_behavior(config, Box::new(behavior)).expect("engine init");
    (engine, calls)
}

#[test]
fn handle_drag_re_derives_dependent_geometry() {
    let (mut engine, calls) = engine_with_midpoint();
    let shape = engine.allocate_shape();
    engine
        .insert_anchor(shape, "start", 100.0, 10.0)
        .expect("insert start");
    engine
        .insert_anchor(shape, "end", 300.0, 30.0)
        .expect("insert end");
    engine
        .insert_anchor(shape, "mid", 200.0, 20.0)
        .expect("insert mid");

    let start = engine
        .shape_points(shape)
        .and_then(|slot| slot.get("start"))
        .copied()
        .expect("start id");
    let mid = engine
        .shape_points(shape)
        .and_then(|slot| slot.get("mid"))
        .copied()
        .expect("mid id");

    // Drag the start handle to (t=500, v=40).
    engine.element_dragged(
        HitTarget::Handle { point: start },
        PointerEvent::primary(500.0, 100.0, 1.0),
    );

    let derived = engine.point(mid).expect("mid anchor");
    assert!((derived.value_x - 400.0).abs() <= 1e-9);
    assert!((derived.value_y - 35.0).abs() <= 1e-9);

    let recorded = calls.borrow();
    assert!(recorded.contains(&"dragged:start".to_owned()));
    assert!(recorded.contains(&format!("segment:{shape}")));
    assert!(recorded.contains(&"elements".to_owned()));
}

#[test]
fn shape_drag_commit_runs_the_segment_hooks() {
    let (mut engine, calls) = engine_with_midpoint();
    let shape = engine.allocate_shape();
    engine
        .insert_anchor(shape, "start", 100.0, 10.0)
        .expect("insert start");
    engine
        .insert_anchor(shape, "end", 300.0, 30.0)
        .expect("insert end");
    calls.borrow_mut().clear();

    engine.element_drag_start(
        HitTarget::Fill { shape },
        PointerEvent::primary(200.0, 200.0, 1.0),
    );
    assert!(calls.borrow().is_empty());

    engine.element_drag_stop(
        HitTarget::Fill { shape },
        PointerEvent::primary(210.0, 190.0, 1.2),
    );
    let recorded = calls.borrow();
    assert_eq!(
        recorded.as_slice(),
        [format!("segment:{shape}"), "elements".to_owned()]
    );
}

#[test]
fn behavior_tweaks_the_handle_template() {
    let (mut engine, _calls) = engine_with_midpoint();
    let handle = engine.handle_style();
    assert!((handle.radius_px - 9.0).abs() <= 1e-12);
    assert!(handle.draggable);
}
