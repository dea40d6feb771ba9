//! Crew hits - damage through a vehicle's hull catching the people inside

use super::context::PersonContext;
use super::resolution::resolve_person_hits_with_dice;
use super::result::CrewHit;
use crate::attack::{DamageInstance, Hit, WeaponSpecialRules};
use crate::config::RuleSet;
use crate::defense::{CrewMember, CrewRole, VehicleDefense};
use crate::dice::Dice;
use crate::types::{Breakpoint, VehicleFacing};

/// Crew of one vehicle with their state as it changes during a call
pub(crate) struct CrewRoster {
    members: Vec<(CrewRole, CrewMember)>,
}

impl CrewRoster {
    pub fn new(vehicle: &VehicleDefense) -> Self {
        CrewRoster {
            members: vehicle
                .crew
                .members()
                .map(|(role, member)| (role, member.clone()))
                .collect(),
        }
    }

    /// Roll for every crew member and resolve the instance against those hit
    ///
    /// All percentile rolls are made before any crew damage is rolled.
    #[allow(clippy::too_many_arguments)]
    pub fn check(
        &mut self,
        hit_number: u32,
        hit_roll: u32,
        landed: &DamageInstance<Breakpoint>,
        vehicle: &VehicleDefense,
        facing: VehicleFacing,
        traits: &WeaponSpecialRules,
        rules: &RuleSet,
        dice: &mut impl Dice,
    ) -> Vec<CrewHit> {
        let caught: Vec<(usize, u32)> = (0..self.members.len())
            .map(|idx| (idx, dice.roll(rules.crew.hit_die)))
            .filter(|(_, roll)| *roll >= rules.crew.hit_threshold)
            .collect();

        if caught.is_empty() {
            return Vec::new();
        }

        let location = rules.hit_location(hit_roll);
        let vehicle_armour = vehicle.armour.get(facing);

        caught
            .into_iter()
            .map(|(idx, roll)| {
                let (role, member) = &mut self.members[idx];

                let mut defense = member.defense.clone();
                if !vehicle.open_top {
                    defense.armour = defense.armour.reinforced(vehicle_armour);
                }

                let crew_hit = Hit::new(
                    hit_number,
                    hit_roll,
                    vec![DamageInstance::new(landed.damage, landed.pierce, location)],
                );
                let resolution = resolve_person_hits_with_dice(
                    &[crew_hit],
                    &defense,
                    traits,
                    &PersonContext::new(),
                    dice,
                );
                resolution.after.write_to(&mut member.defense);

                tracing::info!(
                    crew_id = %member.id,
                    roll,
                    %location,
                    wound_damage = resolution.wound_damage,
                    "crew member hit through the hull"
                );

                CrewHit {
                    crew_id: member.id.clone(),
                    name: member.name.clone(),
                    role: *role,
                    hit_number,
                    roll,
                    location,
                    resolution,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defense::{Breakpoints, Crew, PersonArmour, PersonDefense, Shields, VehicleArmour};
    use crate::dice::ScriptedDice;
    use crate::types::BodyLocation;

    fn crew_member(id: &str, wounds: i32) -> Option<CrewMember> {
        Some(CrewMember {
            id: id.to_string(),
            name: id.to_string(),
            defense: PersonDefense::new(PersonArmour::uniform(2, 4), wounds, Shields::default()),
        })
    }

    fn warthog(open_top: bool) -> VehicleDefense {
        VehicleDefense {
            armour: VehicleArmour {
                front: 6,
                side: 3,
                back: 2,
                top: 1,
                bottom: 1,
            },
            breakpoints: Breakpoints::new([(Breakpoint::Hull, 30)]),
            shields: Shields::default(),
            open_top,
            crew: Crew {
                operators: vec![crew_member("driver", 20)],
                gunners: vec![crew_member("gunner", 20)],
                complement: vec![None, crew_member("passenger", 20)],
            },
        }
    }

    #[test]
    fn test_only_high_rolls_hit() {
        let vehicle = warthog(false);
        let mut roster = CrewRoster::new(&vehicle);
        let mut dice = ScriptedDice::new([95, 96, 12]);
        let landed = DamageInstance::new(20, 0, Breakpoint::Hull);

        let hits = roster.check(
            1,
            5,
            &landed,
            &vehicle,
            VehicleFacing::Front,
            &WeaponSpecialRules::none(),
            &RuleSet::default(),
            &mut dice,
        );

        assert_eq!(hits.len(), 1);
        let hit = &hits[0];
        assert_eq!(hit.crew_id, "gunner");
        assert_eq!(hit.role, CrewRole::Gunner);
        assert_eq!(hit.roll, 96);
        assert_eq!(hit.location, BodyLocation::Head);
        // resistance 4 + front armour 6
        assert_eq!(hit.resolution.wound_damage, 10);
    }

    #[test]
    fn test_open_top_gives_no_armour() {
        let vehicle = warthog(true);
        let mut roster = CrewRoster::new(&vehicle);
        let mut dice = ScriptedDice::new([100, 1, 1]);
        let landed = DamageInstance::new(20, 0, Breakpoint::Hull);

        let hits = roster.check(
            1,
            80,
            &landed,
            &vehicle,
            VehicleFacing::Front,
            &WeaponSpecialRules::none(),
            &RuleSet::default(),
            &mut dice,
        );

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].location, BodyLocation::Chest);
        assert_eq!(hits[0].resolution.wound_damage, 16);
    }

    #[test]
    fn test_crew_state_carries_between_checks() {
        let vehicle = warthog(true);
        let mut roster = CrewRoster::new(&vehicle);
        let mut dice = ScriptedDice::new([99, 1, 1, 99, 1, 1]);
        let landed = DamageInstance::new(14, 0, Breakpoint::Hull);
        let rules = RuleSet::default();

        for _ in 0..2 {
            roster.check(
                1,
                80,
                &landed,
                &vehicle,
                VehicleFacing::Front,
                &WeaponSpecialRules::none(),
                &rules,
                &mut dice,
            );
        }

        let hits = roster.check(
            2,
            80,
            &landed,
            &vehicle,
            VehicleFacing::Front,
            &WeaponSpecialRules::none(),
            &rules,
            &mut ScriptedDice::new([99, 1, 1]),
        );
        // 10 wounds a time from 20: 10, 0, then -10
        assert_eq!(hits[0].resolution.before.wounds, 0);
        assert_eq!(hits[0].resolution.after.wounds, -10);
    }
}
