// src/generator/fallback.rs

use rand::Rng;

pub const TEMPLATE_COUNT: usize = 3;

/// Where template draws come from. Injectable so tests can force a
/// particular selection.
pub trait RandomSource {
    fn pick(&mut self, bound: usize) -> usize;
}

/// Default draw via the thread-local rng.
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, bound: usize) -> usize {
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Local haiku pool used when the API is unconfigured, failing, or
/// rate limited.
pub struct FallbackPool {
    random: Box<dyn RandomSource + Send>,
}

impl FallbackPool {
    pub fn new() -> Self {
        Self {
            random: Box::new(ThreadRandom),
        }
    }

    pub fn with_random(random: Box<dyn RandomSource + Send>) -> Self {
        Self { random }
    }

    /// Picks a template uniformly at random and fills the theme in.
    pub fn compose(&mut self, theme: &str) -> String {
        fill_template(self.random.pick(TEMPLATE_COUNT), theme)
    }
}

impl Default for FallbackPool {
    fn default() -> Self {
        Self::new()
    }
}

/// The three canned shapes. The theme lands in a different line and
/// phrasing in each.
pub fn fill_template(index: usize, theme: &str) -> String {
    match index % TEMPLATE_COUNT {
        0 => format!("Gentle {theme} waits\nbeneath a wide patient sky\ndawn will find it soon"),
        1 => format!("Soft winds drift and turn\nwhispering of {theme} at dusk\nthe world exhales slow"),
        _ => format!("Quiet morning light\nspills across the waking fields\n{theme} blooms within"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed sequence of draws.
    struct Scripted {
        draws: Vec<usize>,
        at: usize,
    }

    impl Scripted {
        fn new(draws: Vec<usize>) -> Self {
            Self { draws, at: 0 }
        }
    }

    impl RandomSource for Scripted {
        fn pick(&mut self, bound: usize) -> usize {
            let draw = self.draws[self.at % self.draws.len()] % bound;
            self.at += 1;
            draw
        }
    }

    #[test]
    fn every_template_embeds_the_theme_once() {
        for index in 0..TEMPLATE_COUNT {
            let haiku = fill_template(index, "rain");
            assert_eq!(haiku.matches("rain").count(), 1, "template {}", index);
            assert_eq!(haiku.lines().count(), 3, "template {}", index);
        }
    }

    #[test]
    fn scripted_draws_select_each_template() {
        let mut pool = FallbackPool::with_random(Box::new(Scripted::new(vec![0, 1, 2])));
        assert_eq!(pool.compose("joy"), fill_template(0, "joy"));
        assert_eq!(pool.compose("joy"), fill_template(1, "joy"));
        assert_eq!(pool.compose("joy"), fill_template(2, "joy"));
    }

    #[test]
    fn selection_is_roughly_uniform() {
        let mut pool = FallbackPool::new();
        let mut counts = [0usize; TEMPLATE_COUNT];
        for _ in 0..3000 {
            let haiku = pool.compose("spring");
            let index = (0..TEMPLATE_COUNT)
                .find(|&i| fill_template(i, "spring") == haiku)
                .expect("haiku must match a template");
            counts[index] += 1;
        }
        for (index, &count) in counts.iter().enumerate() {
            assert!(
                (800..=1200).contains(&count),
                "template {} drawn {} times out of 3000",
                index,
                count
            );
        }
    }
}
