use armory::{RocketLauncher, Weapon, WeaponKind, WeaponSystem};
use fuzzy_logic::DefuzzifyMethod;
use game_script::ScriptConstants;

#[test]
fn rocket_launcher_avoids_point_blank_targets() {
    let mut launcher = RocketLauncher::new(&ScriptConstants::defaults()).unwrap();
    let point_blank = launcher.desirability(10.0).unwrap();
    let medium = launcher.desirability(200.0).unwrap();

    assert_eq!(point_blank, 12.5);
    assert_eq!(medium, 87.5);
}

#[test]
fn scores_share_one_scale_across_weapons() {
    let mut system = WeaponSystem::fully_armed(&ScriptConstants::defaults()).unwrap();
    for distance in [0.0, 40.0, 120.0, 260.0, 700.0, 2000.0] {
        for (kind, score) in system.rank(distance).unwrap() {
            assert!((0.0..=100.0).contains(&score), "{kind} at {distance}: {score}");
        }
    }
}

#[test]
fn selection_follows_target_distance() {
    let mut system = WeaponSystem::fully_armed(&ScriptConstants::defaults()).unwrap();

    assert_eq!(system.select_best(10.0).unwrap(), Some(WeaponKind::Shotgun));
    assert_eq!(
        system.select_best(200.0).unwrap(),
        Some(WeaponKind::RocketLauncher)
    );
    assert_eq!(system.select_best(5.0).unwrap(), Some(WeaponKind::Shotgun));
}

#[test]
fn selection_skips_empty_weapons() {
    let mut system = WeaponSystem::fully_armed(&ScriptConstants::defaults()).unwrap();
    system
        .weapon_mut(WeaponKind::RocketLauncher)
        .unwrap()
        .state_mut()
        .set_rounds(0);

    assert_eq!(system.select_best(200.0).unwrap(), Some(WeaponKind::Shotgun));
}

#[test]
fn method_switch_applies_to_every_weapon() {
    let mut system = WeaponSystem::fully_armed(&ScriptConstants::defaults()).unwrap();
    system.set_method(DefuzzifyMethod::centroid());
    for kind in WeaponKind::ALL {
        assert_eq!(
            system.weapon(kind).unwrap().state().method(),
            DefuzzifyMethod::centroid()
        );
    }
}
