use egui::{PointerButton, Pos2};
use raster_paint::shape::{Drawable, Shape};
use raster_paint::{Color, DrawingSurface, EraserMode, InputEvent, Point, ToolKind};

fn surface_with(tool: ToolKind) -> DrawingSurface {
    let mut surface = DrawingSurface::default();
    surface.set_tool(tool);
    surface
}

fn device(surface: &DrawingSurface, x: f32, y: f32) -> Pos2 {
    surface.mapper().to_device(Point::new(x, y))
}

fn drag_gesture(surface: &mut DrawingSurface, path: &[(f32, f32)]) {
    let points: Vec<Pos2> = path.iter().map(|&(x, y)| device(surface, x, y)).collect();
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    surface.press(*first);
    for &point in rest {
        surface.drag(point);
    }
    surface.release(*points.last().unwrap_or(first));
}

#[test]
fn test_drag_commits_one_shape() {
    let mut surface = surface_with(ToolKind::Rectangle);

    surface.press(device(&surface, -0.2, -0.2));
    surface.drag(device(&surface, 0.0, 0.1));
    surface.drag(device(&surface, 0.2, 0.2));

    // Only the ghost exists while the button is held.
    assert!(surface.is_drawing());
    assert_eq!(surface.shape_count(), 0);
    assert_eq!(surface.snapshot_for_render().len(), 1);

    surface.release(device(&surface, 0.2, 0.2));

    assert!(!surface.is_drawing());
    assert_eq!(surface.shape_count(), 1);
    assert!(surface.scene().current().is_none());
    let Shape::Rectangle(rectangle) = &surface.scene().shapes()[0] else {
        panic!("expected a rectangle");
    };
    let (min, max) = rectangle.bounds();
    assert!(min.distance(Point::new(-0.2, -0.2)) < 1e-4);
    assert!(max.distance(Point::new(0.2, 0.2)) < 1e-4);
}

#[test]
fn test_every_drag_tool_produces_its_shape() {
    let tools = [
        (ToolKind::Line, "line"),
        (ToolKind::Rectangle, "rectangle"),
        (ToolKind::Circle, "circle"),
        (ToolKind::Ellipse, "ellipse"),
        (ToolKind::Triangle, "triangle"),
    ];

    for (tool, name) in tools {
        let mut surface = surface_with(tool);
        drag_gesture(&mut surface, &[(0.0, 0.0), (0.3, 0.2)]);

        assert_eq!(surface.shape_count(), 1, "{tool}");
        assert_eq!(surface.scene().shapes()[0].kind_name(), name);
    }
}

#[test]
fn test_ghost_draws_over_committed_shapes() {
    let mut surface = surface_with(ToolKind::Line);
    drag_gesture(&mut surface, &[(-0.5, 0.0), (0.5, 0.0)]);

    surface.set_tool(ToolKind::Circle);
    surface.press(device(&surface, 0.0, 0.0));
    surface.drag(device(&surface, 0.2, 0.2));

    let snapshot = surface.snapshot_for_render();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].kind_name(), "line");
    assert_eq!(snapshot[1].kind_name(), "circle");
}

#[test]
fn test_style_is_captured_at_press() {
    let mut surface = surface_with(ToolKind::Ellipse);
    surface.settings_mut().color = Color::GREEN;
    surface.settings_mut().thickness = 3.0;

    surface.press(device(&surface, 0.0, 0.0));
    surface.settings_mut().color = Color::BLUE;
    surface.settings_mut().thickness = 9.0;
    surface.release(device(&surface, 0.3, 0.1));

    let style = surface.scene().shapes()[0].style();
    assert_eq!(style.color(), Color::GREEN);
    assert_eq!(style.thickness(), 3.0);
}

#[test]
fn test_leaving_the_canvas_cancels_the_gesture() {
    let mut surface = surface_with(ToolKind::Triangle);
    let start = device(&surface, 0.0, 0.0);
    let end = device(&surface, 0.2, 0.1);

    surface.handle_event(&InputEvent::PointerDown { position: start, button: PointerButton::Primary });
    surface.handle_event(&InputEvent::PointerMove { position: end });
    assert_eq!(surface.snapshot_for_render().len(), 1);

    surface.handle_event(&InputEvent::PointerLeave);
    surface.handle_event(&InputEvent::PointerUp { position: end, button: PointerButton::Primary });

    assert_eq!(surface.shape_count(), 0);
    assert!(surface.snapshot_for_render().is_empty());
}

#[test]
fn test_escape_cancels_the_gesture() {
    let mut surface = surface_with(ToolKind::Brush);
    surface.press(device(&surface, 0.0, 0.0));
    surface.drag(device(&surface, 0.1, 0.0));

    surface.handle_event(&InputEvent::Cancel);
    surface.release(device(&surface, 0.2, 0.0));

    assert_eq!(surface.shape_count(), 0);
    assert!(!surface.is_drawing());
}

#[test]
fn test_switching_tools_mid_gesture_discards_the_ghost() {
    let mut surface = surface_with(ToolKind::Line);
    surface.press(device(&surface, 0.0, 0.0));
    surface.drag(device(&surface, 0.1, 0.1));

    surface.set_tool(ToolKind::Circle);
    surface.release(device(&surface, 0.2, 0.2));

    assert_eq!(surface.shape_count(), 0);
    assert!(surface.snapshot_for_render().is_empty());
}

#[test]
fn test_brush_collects_every_sample() {
    let mut surface = surface_with(ToolKind::Brush);
    drag_gesture(&mut surface, &[(0.0, 0.0), (0.05, 0.0), (0.1, 0.05), (0.1, 0.1)]);

    let Shape::Brush(stroke) = &surface.scene().shapes()[0] else {
        panic!("expected a brush stroke");
    };
    assert!(stroke.points().len() >= 4);
}

#[test]
fn test_brush_click_commits_a_dot() {
    let mut surface = surface_with(ToolKind::Brush);
    let at = device(&surface, 0.3, 0.3);
    surface.press(at);
    surface.release(at);

    assert_eq!(surface.shape_count(), 1);
    assert_eq!(surface.scene().shapes()[0].rasterize().len(), 1);
}

#[test]
fn test_point_erase_only_adds_shapes() {
    let mut surface = surface_with(ToolKind::Line);
    drag_gesture(&mut surface, &[(-0.5, 0.0), (0.5, 0.0)]);
    surface.set_tool(ToolKind::Circle);
    drag_gesture(&mut surface, &[(-0.2, -0.2), (0.2, 0.2)]);
    assert_eq!(surface.shape_count(), 2);

    surface.set_tool(ToolKind::Eraser);
    surface.settings_mut().eraser_mode = EraserMode::Point;
    surface.settings_mut().thickness = 4.0;
    drag_gesture(&mut surface, &[(-0.3, 0.0), (0.0, 0.0), (0.3, 0.0)]);

    assert_eq!(surface.shape_count(), 3);
    let Shape::Brush(trail) = &surface.scene().shapes()[2] else {
        panic!("expected an erase trail");
    };
    assert_eq!(trail.style().color(), surface.background());
    assert_eq!(trail.style().thickness(), 8.0);
}

#[test]
fn test_shape_erase_removes_only_hit_shapes() {
    let mut surface = surface_with(ToolKind::Line);
    drag_gesture(&mut surface, &[(-0.5, 0.0), (0.5, 0.0)]);
    surface.set_tool(ToolKind::Circle);
    drag_gesture(&mut surface, &[(0.6, 0.6), (0.8, 0.8)]);
    surface.set_tool(ToolKind::Rectangle);
    drag_gesture(&mut surface, &[(-0.1, -0.1), (0.1, 0.1)]);
    assert_eq!(surface.shape_count(), 3);

    surface.set_tool(ToolKind::Eraser);
    surface.select_eraser_mode("shape").unwrap();
    let at = device(&surface, 0.0, 0.0);
    surface.press(at);
    surface.release(at);

    assert_eq!(surface.shape_count(), 1);
    assert_eq!(surface.scene().shapes()[0].kind_name(), "circle");
    assert!(surface.scene().current().is_none());
}

#[test]
fn test_shape_erase_tolerance_follows_live_thickness() {
    let mut surface = surface_with(ToolKind::Circle);
    drag_gesture(&mut surface, &[(0.4, -0.1), (0.6, 0.1)]);
    assert_eq!(surface.shape_count(), 1);

    surface.set_tool(ToolKind::Eraser);
    surface.settings_mut().eraser_mode = EraserMode::Shape;
    surface.settings_mut().thickness = 1.0;

    // 0.15 from the center of a radius 0.1 circle.
    let probe = device(&surface, 0.65, 0.0);
    surface.press(probe);
    assert_eq!(surface.shape_count(), 1);

    surface.settings_mut().thickness = 3.0;
    surface.drag(probe);
    assert_eq!(surface.shape_count(), 0);
    surface.release(probe);
}

#[test]
fn test_unknown_tool_keeps_the_current_one() {
    let mut surface = surface_with(ToolKind::Circle);

    let err = surface.select_tool("spray").unwrap_err();
    assert_eq!(err.to_string(), "Unknown tool: spray");
    assert_eq!(surface.settings().tool, ToolKind::Circle);

    drag_gesture(&mut surface, &[(0.0, 0.0), (0.2, 0.2)]);
    assert_eq!(surface.scene().shapes()[0].kind_name(), "circle");

    assert_eq!(surface.select_tool("Brush"), Ok(ToolKind::Brush));
    assert!(surface.select_eraser_mode("smudge").is_err());
    assert_eq!(surface.settings().eraser_mode, EraserMode::Point);
}

#[test]
fn test_zoom_area_changes_view_without_shapes() {
    let mut surface = surface_with(ToolKind::ZoomArea);

    surface.press(device(&surface, 0.2, 0.0));
    surface.drag(device(&surface, 0.6, 0.3));
    assert_eq!(surface.snapshot_for_render().len(), 1);
    surface.release(device(&surface, 1.0, 0.6));

    assert_eq!(surface.shape_count(), 0);
    assert!(surface.snapshot_for_render().is_empty());
    assert!(surface.mapper().zoom() > 1.0);
    let center = surface.mapper().to_device(Point::new(0.6, 0.3));
    assert!((center.x - 400.0).abs() < 0.5 && (center.y - 300.0).abs() < 0.5);
}

#[test]
fn test_tiny_zoom_area_is_ignored() {
    let mut surface = surface_with(ToolKind::ZoomArea);
    drag_gesture(&mut surface, &[(0.0, 0.0), (0.001, 0.001)]);

    assert_eq!(surface.mapper().zoom(), 1.0);
}

#[test]
fn test_secondary_drag_pans_without_drawing() {
    let mut surface = surface_with(ToolKind::Line);
    let start = Pos2::new(400.0, 300.0);
    let end = Pos2::new(500.0, 300.0);

    surface.handle_event(&InputEvent::PointerDown { position: start, button: PointerButton::Secondary });
    surface.handle_event(&InputEvent::PointerMove { position: end });
    surface.handle_event(&InputEvent::PointerUp { position: end, button: PointerButton::Secondary });

    assert_eq!(surface.shape_count(), 0);
    assert!(surface.mapper().pan().x != 0.0);
    // The point that was under the cursor followed it.
    let under = surface.mapper().to_drawing(end);
    assert!(under.distance(Point::ORIGIN) < 1e-4);
}

#[test]
fn test_clear_keeps_the_gesture_in_progress() {
    let mut surface = surface_with(ToolKind::Line);
    drag_gesture(&mut surface, &[(0.0, 0.0), (0.1, 0.1)]);
    drag_gesture(&mut surface, &[(0.2, 0.0), (0.3, 0.1)]);

    surface.press(device(&surface, -0.3, -0.3));
    surface.clear();
    assert_eq!(surface.shape_count(), 0);

    surface.release(device(&surface, -0.1, -0.3));
    assert_eq!(surface.shape_count(), 1);
}

#[test]
fn test_cursor_outline_tracks_brush_and_eraser() {
    let mut surface = surface_with(ToolKind::Brush);
    surface.settings_mut().thickness = 6.0;
    surface.handle_event(&InputEvent::PointerMove { position: Pos2::new(400.0, 300.0) });

    let outline = surface.cursor_outline().unwrap();
    assert!(outline.center.distance(Point::ORIGIN) < 1e-6);
    assert_eq!(outline.radius, 3.0);

    surface.set_tool(ToolKind::Eraser);
    assert_eq!(surface.cursor_outline().unwrap().radius, 6.0);

    surface.set_tool(ToolKind::Line);
    assert!(surface.cursor_outline().is_none());
}

#[test]
fn test_line_keeps_its_drag_endpoints() {
    let mut surface = surface_with(ToolKind::Line);
    drag_gesture(&mut surface, &[(-0.4, 0.1), (0.0, 0.0), (0.3, -0.2)]);

    let Shape::Line(line) = &surface.scene().shapes()[0] else {
        panic!("expected a line");
    };
    assert!(line.start().distance(Point::new(-0.4, 0.1)) < 1e-4);
    assert!(line.end().distance(Point::new(0.3, -0.2)) < 1e-4);
}

#[test]
fn test_ctrl_wheel_zooms_one_step_per_event() {
    let mut surface = surface_with(ToolKind::Line);

    surface.handle_event(&InputEvent::Zoom { factor: 1.2 });
    assert!((surface.mapper().zoom() - 1.1).abs() < 1e-5);

    surface.handle_event(&InputEvent::Zoom { factor: 0.8 });
    surface.handle_event(&InputEvent::Zoom { factor: 0.8 });
    assert!((surface.mapper().zoom() - 0.9).abs() < 1e-5);

    surface.handle_event(&InputEvent::Zoom { factor: 1.0 });
    assert!((surface.mapper().zoom() - 0.9).abs() < 1e-5);
    assert_eq!(surface.shape_count(), 0);
}

#[test]
fn test_wheel_zoom_stops_at_the_limit() {
    let mut surface = surface_with(ToolKind::Line);
    for _ in 0..100 {
        surface.handle_event(&InputEvent::Zoom { factor: 1.5 });
    }
    assert_eq!(surface.mapper().zoom(), surface.config().max_zoom);
}

#[test]
fn test_out_of_range_thickness_still_erases() {
    let mut surface = surface_with(ToolKind::Circle);
    drag_gesture(&mut surface, &[(0.4, -0.1), (0.6, 0.1)]);

    surface.set_tool(ToolKind::Eraser);
    surface.settings_mut().eraser_mode = EraserMode::Shape;
    surface.settings_mut().thickness = -5.0;

    // 0.11 from the center: only reachable with the minimum 0.02 tolerance.
    let probe = device(&surface, 0.61, 0.0);
    surface.press(probe);
    surface.release(probe);
    assert_eq!(surface.shape_count(), 0);
}

#[test]
fn test_cursor_outline_never_shrinks_below_minimum() {
    let mut surface = surface_with(ToolKind::Brush);
    surface.settings_mut().thickness = 0.0;
    surface.handle_event(&InputEvent::PointerMove { position: Pos2::new(400.0, 300.0) });

    assert_eq!(surface.cursor_outline().unwrap().radius, 0.5);

    surface.set_tool(ToolKind::Eraser);
    assert_eq!(surface.cursor_outline().unwrap().radius, 1.0);

    surface.settings_mut().eraser_mode = EraserMode::Shape;
    let radius = surface.cursor_outline().unwrap().radius;
    assert!((radius - 0.02 * surface.mapper().pixels_per_unit()).abs() < 1e-4);
}
