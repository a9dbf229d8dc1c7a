//! Effects domain: tests for after-image fading.

use super::GhostTrail;

#[test]
fn test_ghost_alpha_fades_linearly() {
    let mut ghost = GhostTrail {
        remaining: 0.2,
        lifetime: 0.2,
        base_alpha: 0.6,
    };
    assert!((ghost.alpha() - 0.6).abs() < 1e-6);

    ghost.remaining = 0.1;
    assert!((ghost.alpha() - 0.3).abs() < 1e-6);

    ghost.remaining = -0.05;
    assert_eq!(ghost.alpha(), 0.0);
}

#[test]
fn test_ghost_with_no_lifetime_is_invisible() {
    let ghost = GhostTrail {
        remaining: 0.0,
        lifetime: 0.0,
        base_alpha: 1.0,
    };
    assert_eq!(ghost.alpha(), 0.0);
}
