use armory::{Battlefield, ProjectileKind, Shotgun, Vec2, Weapon, WeaponError, WeaponOwner};
use fuzzy_logic::DefuzzifyMethod;
use game_script::{ScriptConstants, ScriptValue};
use rand::SeedableRng;
use rand::rngs::StdRng;

struct Bot {
    id: u32,
    position: Vec2,
}

impl WeaponOwner for Bot {
    fn id(&self) -> u32 {
        self.id
    }

    fn position(&self) -> Vec2 {
        self.position
    }
}

#[derive(Default)]
struct RecordingWorld {
    projectiles: Vec<(u32, ProjectileKind, Vec2, Vec2)>,
    sounds: Vec<(u32, Vec2, f64)>,
}

impl Battlefield for RecordingWorld {
    fn add_projectile(&mut self, owner: u32, kind: ProjectileKind, origin: Vec2, target: Vec2) {
        self.projectiles.push((owner, kind, origin, target));
    }

    fn add_sound_trigger(&mut self, owner: u32, origin: Vec2, range: f64) {
        self.sounds.push((owner, origin, range));
    }
}

/// Default tuning with room for 100 rounds.
fn script() -> ScriptConstants {
    ScriptConstants::defaults().with("ShotGun_MaxRoundsCarried", ScriptValue::Integer(100))
}

fn shotgun_with(rounds: u32) -> Shotgun {
    let mut gun = Shotgun::new(&script()).unwrap();
    gun.state_mut().set_rounds(rounds);
    gun
}

fn doms(gun: &Shotgun) -> Vec<f64> {
    gun.state()
        .fuzzy_module()
        .variables()
        .iter()
        .flat_map(|var| var.sets().iter().map(|set| set.dom()))
        .collect()
}

#[test]
fn close_target_and_full_ammo_scores_very_desirable() {
    let mut gun = shotgun_with(80);
    let score = gun.desirability(10.0).unwrap();

    let fm = gun.state().fuzzy_module();
    let very = fm.set_id("Desirability", "VeryDesirable").unwrap();
    assert_eq!(fm.dom(very), Some(1.0));
    assert_eq!(score, 87.5);
    assert_eq!(gun.state().last_desirability(), 87.5);
}

#[test]
fn far_target_and_low_ammo_scores_lower() {
    let mut close = shotgun_with(80);
    let mut far = shotgun_with(15);

    let high = close.desirability(10.0).unwrap();
    let low = far.desirability(300.0).unwrap();

    let fm = far.state().fuzzy_module();
    let undesirable = fm.set_id("Desirability", "Undesirable").unwrap();
    assert_eq!(fm.dom(undesirable), Some(0.5));
    assert_eq!(low, 12.5);
    assert!(low < high);
}

#[test]
fn empty_shotgun_short_circuits_to_zero() {
    let mut gun = shotgun_with(0);
    let untouched = doms(&gun);

    assert_eq!(gun.desirability(10.0), Ok(0.0));
    assert_eq!(doms(&gun), untouched);
    assert!(untouched.iter().all(|dom| *dom == 0.0));
}

#[test]
fn running_dry_keeps_last_pipeline_state() {
    let mut gun = shotgun_with(80);
    gun.desirability(10.0).unwrap();
    let before = doms(&gun);

    gun.state_mut().set_rounds(0);
    assert_eq!(gun.desirability(600.0), Ok(0.0));
    assert_eq!(doms(&gun), before);
    assert_eq!(gun.state().last_desirability(), 87.5);
}

#[test]
fn repeated_queries_are_stable() {
    let mut gun = shotgun_with(42);
    let first = gun.desirability(180.0).unwrap();
    let state = doms(&gun);
    let second = gun.desirability(180.0).unwrap();
    assert_eq!(first, second);
    assert_eq!(doms(&gun), state);
}

#[test]
fn centroid_method_can_be_selected() {
    let mut gun = shotgun_with(80);
    gun.state_mut().set_method(DefuzzifyMethod::centroid());
    let score = gun.desirability(10.0).unwrap();
    assert!(score > 50.0 && score < 100.0, "got {score}");
}

#[test]
fn firing_spawns_a_spread_of_pellets() {
    let mut gun = shotgun_with(3);
    let bot = Bot {
        id: 7,
        position: Vec2::new(10.0, 10.0),
    };
    let target = Vec2::new(110.0, 10.0);
    let mut world = RecordingWorld::default();
    let mut rng = StdRng::seed_from_u64(42);

    assert!(gun.shoot_at(&bot, &mut world, target, 1.0, &mut rng));

    assert_eq!(world.projectiles.len(), gun.pellets() as usize);
    for (owner, kind, origin, aim) in &world.projectiles {
        assert_eq!(*owner, 7);
        assert_eq!(*kind, ProjectileKind::Pellet);
        assert_eq!(*origin, bot.position);
        // every pellet keeps the range and deviates by at most the spread
        let offset = *aim - bot.position;
        assert!((offset.length() - 100.0).abs() < 1e-9);
        let angle = offset.y.atan2(offset.x).abs();
        assert!(angle <= gun.spread() + 1e-12, "angle {angle}");
    }
    assert_eq!(world.sounds, vec![(7, bot.position, 400.0)]);
    assert_eq!(gun.state().rounds_remaining(), 2);
}

#[test]
fn cooldown_and_empty_magazine_block_firing() {
    let mut gun = shotgun_with(1);
    let bot = Bot {
        id: 1,
        position: Vec2::ZERO,
    };
    let mut world = RecordingWorld::default();
    let mut rng = StdRng::seed_from_u64(1);
    let target = Vec2::new(50.0, 0.0);

    assert!(gun.shoot_at(&bot, &mut world, target, 5.0, &mut rng));
    gun.state_mut().set_rounds(1);
    // firing frequency is one shot per second
    assert!(!gun.shoot_at(&bot, &mut world, target, 5.5, &mut rng));
    assert!(gun.shoot_at(&bot, &mut world, target, 6.0, &mut rng));
    assert!(!gun.shoot_at(&bot, &mut world, target, 10.0, &mut rng));

    assert_eq!(world.sounds.len(), 2);
}

#[test]
fn zero_spread_fires_straight() {
    let script = script().with("ShotGun_Spread", ScriptValue::Float(0.0));
    let mut gun = Shotgun::new(&script).unwrap();
    let bot = Bot {
        id: 2,
        position: Vec2::ZERO,
    };
    let mut world = RecordingWorld::default();
    let mut rng = StdRng::seed_from_u64(9);

    gun.shoot_at(&bot, &mut world, Vec2::new(0.0, 30.0), 0.0, &mut rng);
    for (_, _, _, aim) in &world.projectiles {
        assert!((*aim - Vec2::new(0.0, 30.0)).length() < 1e-9);
    }
}

#[test]
fn missing_script_constant_fails_construction() {
    let err = Shotgun::new(&ScriptConstants::new()).unwrap_err();
    assert!(matches!(err, WeaponError::Script(_)));
}
