use std::collections::VecDeque;

use rand::RngCore;

/// Random source that replays a fixed list of uniform draws.
///
/// Each `next_u64` yields the bit pattern that `rng.random::<f64>()` maps back
/// to the scripted value, so `random::<f64>()` returns the script exactly (up
/// to 53 bits of precision). Panics once the script is exhausted, which also
/// catches code paths that draw when they should not.
#[derive(Debug, Clone)]
pub(crate) struct ScriptedRng {
    draws: VecDeque<f64>,
}

impl ScriptedRng {
    pub(crate) fn new<I>(draws: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let draws = draws.into_iter().collect::<VecDeque<_>>();
        assert!(
            draws.iter().all(|d| (0.0..1.0).contains(d)),
            "scripted draws must be in [0, 1)"
        );
        Self { draws }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        #[expect(clippy::cast_possible_truncation)]
        let value = (self.next_u64() >> 32) as u32;
        value
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn next_u64(&mut self) -> u64 {
        const SCALE: f64 = (1_u64 << 53) as f64;
        let draw = self
            .draws
            .pop_front()
            .expect("scripted random source exhausted");
        ((draw * SCALE) as u64) << 11
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
