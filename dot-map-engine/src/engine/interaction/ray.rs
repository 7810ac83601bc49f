use bevy::prelude::*;

#[cfg(test)]
#[path = "ray_test.rs"]
mod ray_test;

// Slab-method ray–AABB intersection, returns Some(t) or None
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = ray_direction.map(|d| if d != 0.0 { 1.0 / d } else { f32::INFINITY });

    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    for axis in 0..3 {
        let (origin, lo, hi) = (ray_origin[axis], min[axis], max[axis]);
        if ray_direction[axis] == 0.0 {
            // Parallel to this slab: inside it or never.
            if origin < lo || origin > hi {
                return None;
            }
            continue;
        }
        let mut t0 = (lo - origin) * inv[axis];
        let mut t1 = (hi - origin) * inv[axis];
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 {
        return None;
    }
    Some(if t_enter >= 0.0 { t_enter } else { t_exit })
}

/// Where `ray` meets the `y = 0` ground rectangle of the given half extents.
///
/// The ground is finite, so rays passing beside the map miss.
pub fn ground_plane_hit(ray: Ray3d, half_extents: Vec2) -> Option<Vec3> {
    let distance = ray.intersect_plane(Vec3::ZERO, InfinitePlane3d::new(Vec3::Y))?;
    let point = ray.get_point(distance);
    (point.x.abs() <= half_extents.x && point.z.abs() <= half_extents.y).then_some(point)
}
