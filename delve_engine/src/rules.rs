//! Fixed game rules: spell costs, dice and per-class character tables.

use delve_data::CharacterClass;

use crate::character::Ability;
use crate::dice::Dice;

/// Rolled against a creature's armor class.
pub const ATTACK_DIE: Dice = Dice::new(1, 20, 0);
/// One die of the 4d6-drop-lowest ability roll.
pub const ABILITY_DIE: Dice = Dice::new(1, 6, 0);

pub const SPELL_MANA_COST: u32 = 5;
/// Damage dealt by a Mage's spell.
pub const SPELL_DAMAGE: Dice = Dice::new(3, 8, 5);
/// Healing done by a Priest's spell.
pub const PRIEST_HEAL: Dice = Dice::new(2, 8, 5);

pub const BASE_MANA_POINTS: i32 = 20;

pub fn base_hit_points(class: CharacterClass) -> i32 {
    match class {
        CharacterClass::Warrior => 40,
        CharacterClass::Thief | CharacterClass::Priest => 30,
        CharacterClass::Mage => 20,
    }
}

/// Abilities in the order the highest rolls are assigned to them.
pub fn ability_priority(class: CharacterClass) -> [Ability; 6] {
    use Ability::{Charisma, Constitution, Dexterity, Intelligence, Strength, Wisdom};
    match class {
        CharacterClass::Warrior => [Strength, Constitution, Dexterity, Wisdom, Charisma, Intelligence],
        CharacterClass::Thief => [Dexterity, Constitution, Charisma, Strength, Intelligence, Wisdom],
        CharacterClass::Mage => [Intelligence, Dexterity, Constitution, Wisdom, Charisma, Strength],
        CharacterClass::Priest => [Wisdom, Strength, Constitution, Charisma, Dexterity, Intelligence],
    }
}

/// The ability that powers a caster's mana pool.
pub fn spellcasting_ability(class: CharacterClass) -> Option<Ability> {
    match class {
        CharacterClass::Mage => Some(Ability::Intelligence),
        CharacterClass::Priest => Some(Ability::Wisdom),
        CharacterClass::Warrior | CharacterClass::Thief => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_priority_lists_each_ability_once() {
        for class in CharacterClass::ALL {
            let mut order = ability_priority(class).to_vec();
            order.sort();
            order.dedup();
            assert_eq!(order.len(), 6, "{class}");
        }
    }

    #[test]
    fn only_casters_have_a_casting_ability() {
        for class in CharacterClass::ALL {
            assert_eq!(spellcasting_ability(class).is_some(), class.is_caster());
        }
    }
}
