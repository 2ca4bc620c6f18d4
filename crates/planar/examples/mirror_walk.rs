//! Reflect a point back and forth across two crossing mirrors.
//!
//! Two reflections across lines meeting at angle α compose to a rotation by
//! 2α about their crossing; this walk prints the orbit and checks it closes.

use planar::prelude::*;

fn main() {
    let a = Line::from_points(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
    let b = Line::from_point_direction(Vec2::new(0.0, 0.0), 30.0);
    let hinge = a.intersection(&b).expect("mirrors cross");
    let step = b.reflection_matrix() * a.reflection_matrix();

    let start = Vec2::new(2.0, 0.5);
    let mut p = start;
    for k in 0..6 {
        println!("k={k} p=({:.6}, {:.6}) dist_to_hinge={:.6}", p.x, p.y, (p - hinge).norm());
        p = step.transform_point(p);
    }
    assert!(approx_eq_vec(p, start), "six 60° turns close the orbit");
    println!("closed=true");
}
