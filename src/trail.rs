use ggez::nalgebra::Point2;

/// Fixed-capacity ring buffer of past body positions.
///
/// One sample is recorded per integration step; once full, the oldest
/// sample is evicted. Samples are world positions stored by value.
pub struct Trail {
    samples: Vec<Point2<f32>>,
    head: usize,    // Index of the oldest sample
    len: usize,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Trail {
        Trail {
            samples: vec![Point2::origin(); capacity],
            head: 0,
            len: 0,
            capacity,
        }
    }

    pub fn record(&mut self, position: Point2<f32>) {
        if self.len < self.capacity {
            self.samples[(self.head + self.len) % self.capacity] = position;
            self.len += 1;
        } else {
            // Full: overwrite the oldest slot and advance the head
            self.samples[self.head] = position;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    /// Iterates samples oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Point2<f32>> {
        let (head, capacity) = (self.head, self.capacity);
        (0..self.len).map(move |i| &self.samples[(head + i) % capacity])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point2<f32> {
        Point2::new(x, y)
    }

    #[test]
    fn grows_by_one_until_capacity() {
        let mut trail = Trail::new(4);
        for i in 0..10 {
            let before = trail.len();
            trail.record(p(i as f32, 0.0));
            assert_eq!(trail.len(), (before + 1).min(4));
        }
        assert_eq!(trail.len(), trail.capacity());
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut trail = Trail::new(3);
        for i in 0..5 {
            trail.record(p(i as f32, 0.0));
        }

        let xs: Vec<f32> = trail.iter().map(|pos| pos.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn iterates_oldest_to_newest() {
        let mut trail = Trail::new(8);
        trail.record(p(1.0, 1.0));
        trail.record(p(2.0, 2.0));
        trail.record(p(3.0, 3.0));

        let ys: Vec<f32> = trail.iter().map(|pos| pos.y).collect();
        assert_eq!(ys, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn new_trail_is_empty() {
        let trail = Trail::new(150);
        assert!(trail.is_empty());
        assert_eq!(trail.capacity(), 150);
    }
}
