//! Vehicle resolution - fold an attack's hits over a vehicle target

use super::context::VehicleContext;
use super::crew::CrewRoster;
use super::result::{VehicleInstanceOutcome, VehicleResolution};
use crate::attack::{DamageInstance, VehicleHit, WeaponSpecialRules};
use crate::config::RuleSet;
use crate::damage::resolve_vehicle_instance;
use crate::defense::VehicleDefense;
use crate::dice::{Dice, RngDice};
use crate::types::Breakpoint;

/// Resolve an attack against a vehicle target
///
/// Crew hit checks and any crew Kinetic dice use the thread RNG.
pub fn resolve_vehicle_hits(
    hits: &[VehicleHit],
    target: &VehicleDefense,
    traits: &WeaponSpecialRules,
    context: &VehicleContext,
    rules: &RuleSet,
) -> VehicleResolution {
    let mut rng = rand::thread_rng();
    resolve_vehicle_hits_with_dice(hits, target, traits, context, rules, &mut RngDice(&mut rng))
}

/// Resolve an attack against a vehicle target with the given dice
///
/// With no breakpoint overrides every instance goes to its own breakpoint.
/// Each override is a separate pass over all the hits, starting from where
/// the previous pass left the shields and breakpoints. Damage aimed at a
/// breakpoint that is gone or at zero health goes to the hull instead, and
/// every instance that ends up on the hull rolls for crew hits.
pub fn resolve_vehicle_hits_with_dice(
    hits: &[VehicleHit],
    target: &VehicleDefense,
    traits: &WeaponSpecialRules,
    context: &VehicleContext,
    rules: &RuleSet,
    dice: &mut impl Dice,
) -> VehicleResolution {
    let mut resolution = VehicleResolution::new(target);
    let mut crew = CrewRoster::new(target);

    let passes: Vec<Option<Breakpoint>> = if context.breakpoint_overrides.is_empty() {
        vec![None]
    } else {
        context.breakpoint_overrides.iter().copied().map(Some).collect()
    };

    for (pass, aim) in passes.into_iter().enumerate() {
        for hit in hits {
            if !context.applies(hit.hit_number) {
                if pass == 0 {
                    tracing::info!(hit_number = hit.hit_number, "hit not applied, skipping");
                    resolution.skipped_hits.push(hit.hit_number);
                }
                continue;
            }

            for instance in &hit.instances {
                let aimed_at = aim.unwrap_or(instance.location);
                let struck = if resolution.after.breakpoints.is_intact(aimed_at) {
                    aimed_at
                } else {
                    tracing::debug!(%aimed_at, "breakpoint destroyed, redirecting to hull");
                    Breakpoint::Hull
                };

                let landed = context
                    .modifiers
                    .apply(&DamageInstance::new(instance.damage, instance.pierce, struck));

                let damage = resolve_vehicle_instance(
                    &landed,
                    &target.armour,
                    context.facing,
                    traits,
                    &context.cover,
                    resolution.after.shields,
                );

                // Any instance landing on the hull counts as getting through, even at 0
                let crew_checked = struck == Breakpoint::Hull && damage.vehicle_damage >= 0;
                if crew_checked {
                    let crew_hits = crew.check(
                        hit.hit_number,
                        hit.hit_roll,
                        &landed,
                        target,
                        context.facing,
                        traits,
                        rules,
                        dice,
                    );
                    resolution.crew_hits.extend(crew_hits);
                }

                resolution.record(VehicleInstanceOutcome {
                    hit_number: hit.hit_number,
                    aimed_at,
                    instance: landed,
                    damage,
                    crew_checked,
                });
            }
        }
    }

    tracing::debug!(
        shield_damage = resolution.shield_damage,
        vehicle_damage = resolution.vehicle_damage,
        crew_hits = resolution.crew_hits.len(),
        "vehicle resolution complete"
    );

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attack::{AppliedHits, Hit, WeaponTrait};
    use crate::combat::delta::VehicleDelta;
    use crate::defense::{Breakpoints, Crew, CrewMember, PersonArmour, PersonDefense, Shields, VehicleArmour};
    use crate::dice::ScriptedDice;
    use crate::types::{BodyLocation, VehicleFacing};

    fn crewman(id: &str) -> Option<CrewMember> {
        Some(CrewMember {
            id: id.to_string(),
            name: format!("Crewman {}", id),
            defense: PersonDefense::new(PersonArmour::uniform(2, 4), 20, Shields::default()),
        })
    }

    fn scorpion() -> VehicleDefense {
        VehicleDefense {
            armour: VehicleArmour {
                front: 10,
                side: 8,
                back: 6,
                top: 4,
                bottom: 4,
            },
            breakpoints: Breakpoints::new([
                (Breakpoint::Engine, 0),
                (Breakpoint::Hull, 40),
                (Breakpoint::Mobility, 15),
                (Breakpoint::Optics, 5),
                (Breakpoint::Weapon, 12),
            ]),
            shields: Shields::default(),
            open_top: false,
            crew: Crew {
                operators: vec![crewman("1")],
                gunners: vec![crewman("2"), None],
                complement: vec![crewman("3")],
            },
        }
    }

    fn resolve(
        hits: &[VehicleHit],
        target: &VehicleDefense,
        traits: &WeaponSpecialRules,
        context: &VehicleContext,
        dice: &mut ScriptedDice,
    ) -> VehicleResolution {
        resolve_vehicle_hits_with_dice(hits, target, traits, context, &RuleSet::default(), dice)
    }

    #[test]
    fn test_destroyed_breakpoint_redirects_to_hull_and_rolls_crew() {
        let hits = vec![Hit::burst(1, 12, &[18], 0, Breakpoint::Engine)];
        let mut dice = ScriptedDice::new([10, 97, 20]);
        let result = resolve(
            &hits,
            &scorpion(),
            &WeaponSpecialRules::none(),
            &VehicleContext::new(VehicleFacing::Front),
            &mut dice,
        );

        let outcome = &result.instances[0];
        assert_eq!(outcome.aimed_at, Breakpoint::Engine);
        assert_eq!(outcome.instance.location, Breakpoint::Hull);
        assert!(outcome.redirected());
        assert!(outcome.crew_checked);
        assert_eq!(dice.remaining(), 0);

        assert_eq!(result.after.breakpoints.get(Breakpoint::Hull), Some(32));
        assert_eq!(result.after.breakpoints.get(Breakpoint::Engine), Some(0));

        // One percentile roll per occupied slot, the second one hits
        assert_eq!(result.crew_hits.len(), 1);
        let crew_hit = &result.crew_hits[0];
        assert_eq!(crew_hit.crew_id, "2");
        assert_eq!(crew_hit.location, BodyLocation::LeftArm);
        // 18 against resistance 4 + front armour 10
        assert_eq!(crew_hit.resolution.wound_damage, 4);
        assert_eq!(result.crew_deltas(), vec![("2".to_string(), crew_hit.resolution.delta())]);
    }

    #[test]
    fn test_crew_check_fires_on_zero_hull_damage() {
        let hits = vec![Hit::burst(1, 50, &[3], 0, Breakpoint::Hull)];
        let mut dice = ScriptedDice::new([1, 1, 1]);
        let result = resolve(
            &hits,
            &scorpion(),
            &WeaponSpecialRules::none(),
            &VehicleContext::new(VehicleFacing::Front),
            &mut dice,
        );
        assert_eq!(result.vehicle_damage, 0);
        assert!(result.instances[0].crew_checked);
        assert_eq!(dice.remaining(), 0);
        assert!(result.crew_hits.is_empty());
    }

    #[test]
    fn test_intact_breakpoint_takes_damage_without_crew_check() {
        let hits = vec![Hit::burst(1, 50, &[16], 0, Breakpoint::Weapon)];
        let mut dice = ScriptedDice::default();
        let result = resolve(
            &hits,
            &scorpion(),
            &WeaponSpecialRules::none(),
            &VehicleContext::new(VehicleFacing::Side),
            &mut dice,
        );
        assert_eq!(result.after.breakpoints.get(Breakpoint::Weapon), Some(4));
        assert!(!result.instances[0].crew_checked);
        assert_eq!(result.delta(), VehicleDelta::new(0).with_damage(Breakpoint::Weapon, 8));
    }

    #[test]
    fn test_breakpoint_destroyed_mid_attack() {
        // Optics at 5: the first instance knocks it out, the second goes to the hull
        let hits = vec![Hit::burst(1, 50, &[20, 20], 0, Breakpoint::Optics)];
        let mut target = scorpion();
        target.crew = Crew::default();
        let result = resolve(
            &hits,
            &target,
            &WeaponSpecialRules::none(),
            &VehicleContext::new(VehicleFacing::Front),
            &mut ScriptedDice::default(),
        );
        assert_eq!(result.after.breakpoints.get(Breakpoint::Optics), Some(-5));
        assert_eq!(result.after.breakpoints.get(Breakpoint::Hull), Some(30));
        assert_eq!(result.vehicle_damage, 20);
    }

    #[test]
    fn test_zero_damage_on_missing_hull_keeps_delta_exact() {
        let mut target = scorpion();
        target.armour = VehicleArmour::uniform(50);
        target.breakpoints = Breakpoints::new([(Breakpoint::Engine, 0)]);
        target.crew = Crew::default();
        let hits = vec![Hit::burst(1, 50, &[5], 0, Breakpoint::Engine)];
        let result = resolve(
            &hits,
            &target,
            &WeaponSpecialRules::none(),
            &VehicleContext::new(VehicleFacing::Front),
            &mut ScriptedDice::default(),
        );

        assert_eq!(result.instances[0].instance.location, Breakpoint::Hull);
        assert_eq!(result.vehicle_damage, 0);
        assert_eq!(result.after.breakpoints.get(Breakpoint::Hull), None);
        assert_eq!(result.delta().apply(&result.before), result.after);
    }

    #[test]
    fn test_huge_multiplied_damage_saturates() {
        let mut target = scorpion();
        target.crew = Crew::default();
        let hits = vec![Hit::burst(1, 50, &[1_000_000_000, 1_000_000_000], 0, Breakpoint::Hull)];
        let result = resolve(
            &hits,
            &target,
            &WeaponSpecialRules::none(),
            &VehicleContext::new(VehicleFacing::Front).with_damage_multiplier(3),
            &mut ScriptedDice::default(),
        );

        assert_eq!(result.instances[0].instance.damage, i32::MAX);
        assert_eq!(result.instances[0].damage.vehicle_damage, i32::MAX - 10);
        assert_eq!(result.vehicle_damage, i32::MAX);
        assert_eq!(result.after.breakpoints.get(Breakpoint::Hull), Some(i32::MIN));
    }

    #[test]
    fn test_missing_breakpoint_counts_as_destroyed() {
        let mut target = scorpion();
        target.breakpoints = Breakpoints::new([(Breakpoint::Hull, 10)]);
        target.crew = Crew::default();
        let hits = vec![Hit::burst(1, 50, &[12], 0, Breakpoint::Mobility)];
        let result = resolve(
            &hits,
            &target,
            &WeaponSpecialRules::none(),
            &VehicleContext::new(VehicleFacing::Front),
            &mut ScriptedDice::default(),
        );
        assert_eq!(result.after.breakpoints.get(Breakpoint::Hull), Some(8));
        assert_eq!(result.after.breakpoints.get(Breakpoint::Mobility), None);
    }

    #[test]
    fn test_each_override_is_a_pass() {
        let mut target = scorpion();
        target.crew = Crew::default();
        target.shields = Shields::full(10);
        let hits = vec![Hit::burst(1, 50, &[20], 0, Breakpoint::Hull)];
        let context = VehicleContext::new(VehicleFacing::Front)
            .with_breakpoint_override(Breakpoint::Weapon)
            .with_breakpoint_override(Breakpoint::Mobility);

        let result = resolve(
            &hits,
            &target,
            &WeaponSpecialRules::none(),
            &context,
            &mut ScriptedDice::default(),
        );

        // First pass: shields take 10 and front armour stops the rest. Second pass: 10 gets through.
        assert_eq!(result.instances.len(), 2);
        assert_eq!(result.shield_damage, 10);
        assert_eq!(result.after.shields, 0);
        assert_eq!(result.after.breakpoints.get(Breakpoint::Weapon), Some(12));
        assert_eq!(result.after.breakpoints.get(Breakpoint::Mobility), Some(5));
        assert_eq!(result.after.breakpoints.get(Breakpoint::Hull), Some(40));
    }

    #[test]
    fn test_skipped_hits_skip_every_pass() {
        let mut target = scorpion();
        target.crew = Crew::default();
        let hits = vec![
            Hit::burst(1, 50, &[20], 0, Breakpoint::Hull),
            Hit::burst(2, 50, &[20], 0, Breakpoint::Hull),
        ];
        let context = VehicleContext::new(VehicleFacing::Front)
            .with_all_breakpoints()
            .with_applied_hits(AppliedHits::new([1]));

        let result = resolve(
            &hits,
            &target,
            &WeaponSpecialRules::none(),
            &context,
            &mut ScriptedDice::default(),
        );
        assert_eq!(result.skipped_hits, vec![2]);
        assert!(result.instances.iter().all(|o| o.hit_number == 1));
        assert_eq!(result.instances.len(), Breakpoint::all().len());
    }

    #[test]
    fn test_penetrating_blast_against_vehicle_shields() {
        let mut target = scorpion();
        target.crew = Crew::default();
        target.shields = Shields::full(30);
        let traits = WeaponSpecialRules::resolve(
            &[WeaponTrait::Penetrating, WeaponTrait::Blast],
            &RuleSet::default(),
        );
        let hits = vec![Hit::burst(1, 50, &[10], 4, Breakpoint::Weapon)];
        let result = resolve(
            &hits,
            &target,
            &traits,
            &VehicleContext::new(VehicleFacing::Front),
            &mut ScriptedDice::default(),
        );
        assert_eq!(result.shield_damage, 30);
        assert_eq!(result.vehicle_damage, 0);
        assert_eq!(result.after.shields, 0);
    }

    #[test]
    fn test_snapshot_untouched() {
        let target = scorpion();
        let hits = vec![Hit::burst(1, 50, &[30], 0, Breakpoint::Hull)];
        let result = resolve(
            &hits,
            &target,
            &WeaponSpecialRules::none(),
            &VehicleContext::new(VehicleFacing::Back),
            &mut ScriptedDice::new([1, 1, 1]),
        );
        assert_eq!(target.breakpoints.get(Breakpoint::Hull), Some(40));
        assert_eq!(result.before.breakpoints, target.breakpoints);
        assert_eq!(result.delta().apply(&result.before), result.after);
    }
}
