/// Sampler seed built from two draws of JavaScript's `Math.random`.
pub(crate) fn random_seed() -> u64 {
    use js_sys::Math::random;
    let draw = || (random() * f64::from(u32::MAX)) as u64;
    (draw() << 32) | draw()
}
