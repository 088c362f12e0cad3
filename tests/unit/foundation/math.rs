use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(7);
    let mut b = Rng64::new(7);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn range_stays_in_bounds() {
    let mut rng = Rng64::new(42);
    for _ in 0..1000 {
        let v = rng.range_f64(45.0, 135.0);
        assert!((45.0..135.0).contains(&v));
    }
}

#[test]
fn forks_diverge_from_parent() {
    let mut parent = Rng64::new(1);
    let mut child = parent.fork(3);
    assert_ne!(parent.next_u64(), child.next_u64());
}

#[test]
fn unit_to_u8_clamps_and_rounds() {
    assert_eq!(unit_to_u8(-1.0), 0);
    assert_eq!(unit_to_u8(0.5), 128);
    assert_eq!(unit_to_u8(2.0), 255);
    assert_eq!(lerp(1.0, 0.5, 0.5), 0.75);
}
