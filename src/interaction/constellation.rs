//! Floating skill nodes that drift, push away from the pointer, and are
//! linked when close to each other.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::interaction::{Point, Size};

pub const REPULSION_RADIUS: f64 = 300.0;
pub const REPULSION_STRENGTH: f64 = 1.5;
pub const JITTER: f64 = 0.05;
pub const MIN_SPEED: f64 = 0.8;
pub const MAX_SPEED: f64 = 3.0;
pub const WALL_PADDING: f64 = 50.0;
pub const LINK_DISTANCE: f64 = 300.0;
pub const INITIAL_SPEED: f64 = 2.5;

/// Pointer position used while the pointer is outside the container.
pub const POINTER_PARKED: Point = Point::new(-1000.0, -1000.0);

#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    pub item: T,
    pub position: Point,
    pub velocity: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub width: f64,
}

pub struct SkillConstellation<T> {
    nodes: Vec<Node<T>>,
    bounds: Size,
    pointer: Point,
    rng: StdRng,
}

impl<T> SkillConstellation<T> {
    pub fn new(items: Vec<T>, bounds: Size) -> Self {
        Self::with_rng(items, bounds, StdRng::from_entropy())
    }

    pub fn with_seed(items: Vec<T>, bounds: Size, seed: u64) -> Self {
        Self::with_rng(items, bounds, StdRng::seed_from_u64(seed))
    }

    /// Nodes start inside the middle 80% of the container with a random
    /// velocity of up to `INITIAL_SPEED / 2` per axis.
    fn with_rng(items: Vec<T>, bounds: Size, mut rng: StdRng) -> Self {
        let nodes = items
            .into_iter()
            .map(|item| Node {
                item,
                position: Point::new(
                    rng.gen::<f64>() * bounds.width * 0.8 + bounds.width * 0.1,
                    rng.gen::<f64>() * bounds.height * 0.8 + bounds.height * 0.1,
                ),
                velocity: Point::new(
                    (rng.gen::<f64>() - 0.5) * INITIAL_SPEED,
                    (rng.gen::<f64>() - 0.5) * INITIAL_SPEED,
                ),
            })
            .collect();

        Self {
            nodes,
            bounds,
            pointer: POINTER_PARKED,
            rng,
        }
    }

    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [Node<T>] {
        &mut self.nodes
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn pointer_moved(&mut self, position: Point) {
        self.pointer = position;
    }

    pub fn pointer_left(&mut self) {
        self.pointer = POINTER_PARKED;
    }

    /// Existing nodes keep their positions; the next step bounces any that
    /// ended up outside.
    pub fn resize(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    /// One animation frame.
    pub fn step(&mut self) {
        let pointer = self.pointer;
        let bounds = self.bounds;

        for node in &mut self.nodes {
            let mut v = node.velocity;

            // Pointer repulsion
            let dx = node.position.x - pointer.x;
            let dy = node.position.y - pointer.y;
            let distance = dx.hypot(dy);
            if distance < REPULSION_RADIUS {
                let force = (REPULSION_RADIUS - distance) / REPULSION_RADIUS;
                let angle = dy.atan2(dx);
                v.x += angle.cos() * force * REPULSION_STRENGTH;
                v.y += angle.sin() * force * REPULSION_STRENGTH;
            }

            // Wander
            v.x += self.rng.gen_range(-JITTER..JITTER);
            v.y += self.rng.gen_range(-JITTER..JITTER);

            v = clamp_speed(v, &mut self.rng);

            node.position.x += v.x;
            node.position.y += v.y;

            bounce(&mut node.position, &mut v, bounds);
            node.velocity = v;
        }
    }

    /// Pairs closer than `LINK_DISTANCE`, each reported once.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.nodes.iter().enumerate() {
            for (j, b) in self.nodes.iter().enumerate().skip(i + 1) {
                let distance = a.position.distance_to(b.position);
                if distance < LINK_DISTANCE {
                    links.push(Link {
                        from: i,
                        to: j,
                        width: link_width(distance),
                    });
                }
            }
        }
        links
    }
}

pub fn link_width(distance: f64) -> f64 {
    (3.0 - distance / 100.0).max(0.5)
}

fn clamp_speed<R: Rng>(v: Point, rng: &mut R) -> Point {
    let speed = v.x.hypot(v.y);
    if speed == 0.0 {
        return Point::new(
            (rng.gen::<f64>() - 0.5) * MIN_SPEED,
            (rng.gen::<f64>() - 0.5) * MIN_SPEED,
        );
    }
    if speed < MIN_SPEED {
        return Point::new(v.x / speed * MIN_SPEED, v.y / speed * MIN_SPEED);
    }
    if speed > MAX_SPEED {
        return Point::new(v.x / speed * MAX_SPEED, v.y / speed * MAX_SPEED);
    }
    v
}

fn bounce(position: &mut Point, v: &mut Point, bounds: Size) {
    if position.x <= WALL_PADDING {
        position.x = WALL_PADDING;
        v.x = v.x.abs();
    }
    if position.x >= bounds.width - WALL_PADDING {
        position.x = bounds.width - WALL_PADDING;
        v.x = -v.x.abs();
    }
    if position.y <= WALL_PADDING {
        position.y = WALL_PADDING;
        v.y = v.y.abs();
    }
    if position.y >= bounds.height - WALL_PADDING {
        position.y = bounds.height - WALL_PADDING;
        v.y = -v.y.abs();
    }
}
