//! Combat domain: unit tests for health and stun status.

use super::{Health, Stun};

#[test]
fn test_health_take_damage_clamps_at_zero() {
    let mut health = Health::new(30.0);

    assert_eq!(health.take_damage(10.0), 10.0);
    assert_eq!(health.current, 20.0);
    assert!(health.is_alive());

    assert_eq!(health.take_damage(50.0), 20.0);
    assert_eq!(health.current, 0.0);
    assert!(health.is_dead());
}

#[test]
fn test_health_ignores_negative_damage() {
    let mut health = Health::new(30.0);
    assert_eq!(health.take_damage(-5.0), 0.0);
    assert_eq!(health.current, 30.0);
}

#[test]
fn test_stun_keeps_longest_duration() {
    let mut stun = Stun::default();
    assert!(!stun.is_stunned());

    stun.apply(0.5);
    stun.apply(0.2);
    assert_eq!(stun.timer, 0.5);
    assert!(stun.is_stunned());
}

#[test]
fn test_stun_expires() {
    let mut stun = Stun::default();
    stun.apply(0.5);

    stun.tick(0.3);
    assert!(stun.is_stunned());

    stun.tick(0.3);
    assert!(!stun.is_stunned());
    assert_eq!(stun.timer, 0.0);
}
