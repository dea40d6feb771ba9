//! Person resolution - fold an attack's hits over a person target

use super::context::PersonContext;
use super::result::PersonResolution;
use crate::attack::{DamageInstance, PersonHit, WeaponSpecialRules};
use crate::damage::resolve_person_instance;
use crate::defense::PersonDefense;
use crate::dice::{Dice, RngDice};

/// Resolve an attack against a person target
///
/// Rolls the Kinetic bonus die with the thread RNG. The target is not
/// modified; apply [`PersonResolution::delta`] to update it.
pub fn resolve_person_hits(
    hits: &[PersonHit],
    target: &PersonDefense,
    traits: &WeaponSpecialRules,
    context: &PersonContext,
) -> PersonResolution {
    let mut rng = rand::thread_rng();
    resolve_person_hits_with_dice(hits, target, traits, context, &mut RngDice(&mut rng))
}

/// Resolve an attack against a person target with the given dice
///
/// Hits are taken in order and every instance of a hit in order. Shields
/// lost to one instance are gone for the next, across hits. Hits the
/// context doesn't apply are skipped without touching any running total.
pub fn resolve_person_hits_with_dice(
    hits: &[PersonHit],
    target: &PersonDefense,
    traits: &WeaponSpecialRules,
    context: &PersonContext,
    dice: &mut impl Dice,
) -> PersonResolution {
    let mut resolution = PersonResolution::new(target);

    for hit in hits {
        if !context.applies(hit.hit_number) {
            tracing::info!(hit_number = hit.hit_number, "hit not applied, skipping");
            resolution.skipped_hits.push(hit.hit_number);
            continue;
        }

        for instance in &hit.instances {
            let location = context.called_shot.unwrap_or(instance.location);
            let landed = context
                .modifiers
                .apply(&DamageInstance::new(instance.damage, instance.pierce, location));

            let damage = resolve_person_instance(
                &landed,
                &target.armour,
                traits,
                &context.cover,
                resolution.after.shields,
                dice,
            );
            resolution.record(hit.hit_number, landed, damage);
        }
    }

    tracing::debug!(
        shield_damage = resolution.shield_damage,
        wound_damage = resolution.wound_damage,
        wounds_after = resolution.after.wounds,
        "person resolution complete"
    );

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attack::{AppliedHits, Hit, WeaponTrait};
    use crate::combat::delta::PersonState;
    use crate::config::RuleSet;
    use crate::defense::{Cover, LocationArmour, PersonArmour, Shields};
    use crate::dice::ScriptedDice;
    use crate::types::BodyLocation;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn traits(list: &[WeaponTrait]) -> WeaponSpecialRules {
        WeaponSpecialRules::resolve(list, &RuleSet::default())
    }

    fn marine(wounds: i32, shields: i32) -> PersonDefense {
        PersonDefense::new(PersonArmour::uniform(3, 5), wounds, Shields::full(shields))
    }

    fn resolve(
        hits: &[PersonHit],
        target: &PersonDefense,
        traits: &WeaponSpecialRules,
        context: &PersonContext,
    ) -> PersonResolution {
        resolve_person_hits_with_dice(hits, target, traits, context, &mut ScriptedDice::default())
    }

    #[test]
    fn test_resistance_reduces_wounds() {
        let hits = vec![Hit::burst(1, 70, &[10], 0, BodyLocation::Chest)];
        let result = resolve(&hits, &marine(20, 0), &traits(&[]), &PersonContext::new());
        assert_eq!(result.wound_damage, 5);
        assert_eq!(result.shield_damage, 0);
        assert_eq!(result.after.wounds, 15);
    }

    #[test]
    fn test_pierce_cancels_resistance() {
        let hits = vec![Hit::burst(1, 70, &[10], 7, BodyLocation::Chest)];
        let result = resolve(&hits, &marine(20, 0), &traits(&[]), &PersonContext::new());
        assert_eq!(result.wound_damage, 10);
    }

    #[test]
    fn test_shields_carry_across_instances_and_hits() {
        // 8 shields: first instance takes them all, the rest go straight to armour
        let hits = vec![
            Hit::burst(1, 70, &[6, 6], 0, BodyLocation::Chest),
            Hit::burst(2, 40, &[9], 0, BodyLocation::LeftLeg),
        ];
        let result = resolve(&hits, &marine(20, 8), &traits(&[]), &PersonContext::new());

        let per_instance: Vec<_> = result
            .instances
            .iter()
            .map(|o| (o.damage.shield_damage, o.damage.wound_damage))
            .collect();
        // 6 absorbed; 2 left on shields then 4 through to armour (0 wounds);
        // shields down so 9 - 5 = 4
        assert_eq!(per_instance, vec![(6, 0), (2, 0), (0, 4)]);
        assert_eq!(
            result.after,
            PersonState {
                wounds: 16,
                shields: 0
            }
        );
        assert_eq!(result.total_damage, 12);
    }

    #[test]
    fn test_skipped_hits_change_nothing() {
        let hits = vec![
            Hit::burst(1, 70, &[12], 2, BodyLocation::Chest),
            Hit::burst(2, 15, &[30], 4, BodyLocation::Head),
            Hit::burst(3, 50, &[8], 0, BodyLocation::RightLeg),
        ];
        let target = marine(25, 10);
        let only_first_and_last = PersonContext::new().with_applied_hits(AppliedHits::new([1, 3]));
        let without_second = vec![hits[0].clone(), hits[2].clone()];

        let skipped = resolve(&hits, &target, &traits(&[]), &only_first_and_last);
        let absent = resolve(&without_second, &target, &traits(&[]), &PersonContext::new());

        assert_eq!(skipped.skipped_hits, vec![2]);
        assert_eq!(skipped.after, absent.after);
        assert_eq!(skipped.instances, absent.instances);
        assert_eq!(skipped.total_damage, absent.total_damage);
    }

    #[test]
    fn test_called_shot_overrides_location() {
        let armour = PersonArmour::uniform(10, 14).with(BodyLocation::Head, LocationArmour::new(4, 8));
        let target = PersonDefense::new(armour, 20, Shields::default());
        let hits = vec![Hit::burst(1, 70, &[15, 15], 0, BodyLocation::Chest)];

        let context = PersonContext::new().with_called_shot(BodyLocation::Head);
        let result = resolve(&hits, &target, &traits(&[WeaponTrait::Headshot]), &context);
        assert!(result
            .instances
            .iter()
            .all(|o| o.instance.location == BodyLocation::Head));
        assert_eq!(result.wound_damage, 22);
    }

    #[test]
    fn test_modifiers_apply_to_every_instance() {
        let hits = vec![Hit::burst(1, 70, &[5, 5], 0, BodyLocation::Chest)];
        let context = PersonContext::new()
            .with_damage_multiplier(2)
            .with_extra_pierce(3);
        let result = resolve(&hits, &marine(20, 0), &traits(&[]), &context);
        // 10 each against resistance 5 - 3
        assert_eq!(result.wound_damage, 16);
        assert!(result
            .instances
            .iter()
            .all(|o| o.instance.damage == 10 && o.instance.pierce == 3));
    }

    #[test]
    fn test_wounds_may_go_negative() {
        let hits = vec![Hit::burst(1, 70, &[40], 0, BodyLocation::Chest)];
        let result = resolve(&hits, &marine(10, 0), &traits(&[]), &PersonContext::new());
        assert_eq!(result.after.wounds, -25);
        assert!(result.is_down());
    }

    #[test]
    fn test_kinetic_uses_injected_dice() {
        let hits = vec![Hit::burst(1, 70, &[10], 0, BodyLocation::Chest)];
        let kinetic = traits(&[WeaponTrait::Kinetic]);

        let mut rng = StdRng::seed_from_u64(42);
        let result = resolve_person_hits_with_dice(
            &hits,
            &marine(20, 0),
            &kinetic,
            &PersonContext::new(),
            &mut RngDice(&mut rng),
        );
        // 10 + 1d10 - 5
        assert!((6..=15).contains(&result.wound_damage));

        let mut dice = ScriptedDice::new([10]);
        let result =
            resolve_person_hits_with_dice(&hits, &marine(20, 0), &kinetic, &PersonContext::new(), &mut dice);
        assert_eq!(result.wound_damage, 15);
    }

    fn any_trait_set() -> impl Strategy<Value = Vec<WeaponTrait>> {
        prop::collection::vec(prop::sample::select(WeaponTrait::all().to_vec()), 0..4)
    }

    fn any_location() -> impl Strategy<Value = BodyLocation> {
        prop::sample::select(BodyLocation::all().to_vec())
    }

    proptest! {
        #[test]
        fn prop_damage_is_never_negative(
            damages in prop::collection::vec(0i32..60, 1..6),
            pierce in 0i32..40,
            protection in -5i32..20,
            toughness in 0i32..10,
            shields in 0i32..40,
            cover_points in 0i32..10,
            covered in prop::collection::vec(any_location(), 0..6),
            location in any_location(),
            trait_list in any_trait_set(),
            seed in any::<u64>(),
        ) {
            let target = PersonDefense::new(
                PersonArmour::uniform(protection, protection + toughness),
                30,
                Shields::full(shields),
            );
            let hits = vec![Hit::burst(1, 50, &damages, pierce, location)];
            let context = PersonContext::new().with_cover(Cover::new(cover_points, covered));
            let traits = WeaponSpecialRules::resolve(&trait_list, &RuleSet::default());

            let mut rng = StdRng::seed_from_u64(seed);
            let result = resolve_person_hits_with_dice(&hits, &target, &traits, &context, &mut RngDice(&mut rng));

            for outcome in &result.instances {
                prop_assert!(outcome.damage.shield_damage >= 0);
                prop_assert!(outcome.damage.wound_damage >= 0);
            }
            prop_assert!(result.after.shields >= 0);
            prop_assert!(result.shield_damage <= shields);
        }

        #[test]
        fn prop_shield_first(
            damage in 0i32..60,
            pierce in 0i32..20,
            shields in 1i32..40,
            trait_list in any_trait_set(),
        ) {
            let target = PersonDefense::new(PersonArmour::uniform(0, 0), 30, Shields::full(shields));
            let hits = vec![Hit::burst(1, 70, &[damage], pierce, BodyLocation::Chest)];
            let traits = WeaponSpecialRules::resolve(&trait_list, &RuleSet::default());
            let result = resolve(&hits, &target, &traits, &PersonContext::new());

            let outcome = &result.instances[0];
            prop_assert!(outcome.damage.shield_damage <= shields);
            if !traits.kinetic && outcome.damage.shield_damage < shields {
                // Shields held, so nothing reached the armour
                prop_assert_eq!(outcome.damage.wound_damage, 0);
            }
        }
    }
}
