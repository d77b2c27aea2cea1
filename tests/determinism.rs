use tendon::{NoOpStepObserver, Particle, Vec, Vec3, World, WorldConfig};

fn rope(segments: usize) -> World<Vec3<f32>> {
    let config = WorldConfig::new()
        .with_gravity(Vec3::new(0.0, -9.81, 0.0))
        .with_iterations(8)
        .with_drag(0.99);
    let mut world = World::new(config);
    let start = Vec3::new(0.0, 10.0, 0.0);
    let end = Vec3::new(10.0, 10.0, 2.0);

    let mut prev = world.add_particle(Particle::fixed(start));
    for i in 1..=segments {
        let t = i as f32 / segments as f32;
        let next = world.add_particle(Particle::new(start.lerp(end, t), 1.0));
        let spring = world.make_spring_at_rest(prev, next, 0.9).unwrap();
        world.spring_mut(spring).unwrap().set_force_cap(0.5);
        prev = next;
    }
    world
}

#[test]
fn rope_deterministic() {
    let results: std::vec::Vec<_> = (0..5).map(|_| {
        let mut world = rope(10);
        for _ in 0..60 {
            world.step(1.0 / 60.0, &mut NoOpStepObserver);
        }
        world.particles().iter().map(|p| p.position()).collect::<std::vec::Vec<_>>()
    }).collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
            assert_eq!(a.z, b.z);
        }
    }
}

#[test]
fn rope_sags_but_anchor_holds() {
    let mut world = rope(10);
    let anchor = world.particles()[0].position();
    for _ in 0..120 {
        world.step(1.0 / 60.0, &mut NoOpStepObserver);
    }

    assert_eq!(world.particles()[0].position(), anchor);
    let tail = world.particles()[10].position();
    assert!(tail.y < 10.0, "rope end should drop, y = {}", tail.y);
    assert!(tail.x.is_finite() && tail.y.is_finite() && tail.z.is_finite());
}
