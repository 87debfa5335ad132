//! Stock boards.
//!
//! - **Standard**: the 40-tile campus board, $1500 to start.
//! - **Hate Your Fellow TAs?**: one property, many ways to lose it.
//! - **Deathmatch**: no money, no jail, only kill cards.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::card::{Card, CardChoice, CardEffect, CardOutcome, ScriptedCard};
use super::item::{Building, CardPower, Item, OwnableCard, HOTEL, HOUSE, MONEY};
use super::property::{money, Property, PropertyCategory};
use super::tile::Tile;
use super::Board;
use crate::core::Ledger;

/// Every stock board, in menu order.
#[must_use]
pub fn all() -> Vec<Arc<Board>> {
    vec![standard(), friendship_ending(), deathmatch()]
}

/// The assistant who helps you backstab your friends.
#[must_use]
pub fn clippy() -> Card {
    let thanks = ScriptedCard::new(
        "No need to thank me!",
        "Actually, there is. Give Anthony Li a 100 on Gradescope!",
        vec![],
    );
    let ungrateful = ScriptedCard::new("Wow, ungrateful.", "Thanks for the money, though.", vec![]);

    let offer = ScriptedCard::new(
        "Awww, you miss me!",
        "It looks like you are trying to backstab all your friends. Would you like help?",
        vec![
            CardChoice::new(
                "Backstab my friends with help",
                vec![
                    CardEffect::GrantPerPlayer(money(50)),
                    CardEffect::ChargeEveryone(money(50)),
                ],
                CardOutcome::Next(Box::new(Card::Scripted(thanks))),
            ),
            CardChoice::new(
                "Just backstab my friends without help",
                vec![CardEffect::Grant(money(-100))],
                CardOutcome::Next(Box::new(Card::Scripted(ungrateful))),
            ),
        ],
    );

    Card::Scripted(ScriptedCard::new(
        "Hi, I'm Clippy!",
        "Remember me, your beloved CIS 1200 Paint Intelligent Assistant?",
        vec![CardChoice::new(
            "Oh no, not you again.",
            vec![],
            CardOutcome::Next(Box::new(Card::Scripted(offer))),
        )],
    ))
}

fn base_items() -> BTreeMap<String, Item> {
    let mut items = BTreeMap::new();
    items.insert(MONEY.to_string(), Item::Money);
    items.insert(HOUSE.to_string(), Item::Building(Building::House));
    items.insert(HOTEL.to_string(), Item::Building(Building::Hotel));
    insert_card(&mut items, OwnableCard::get_out_of_jail_free());
    items
}

fn insert_card(items: &mut BTreeMap<String, Item>, card: OwnableCard) {
    items.insert(card.id.clone(), Item::Card(card));
}

fn insert_streets(
    items: &mut BTreeMap<String, Item>,
    category: &PropertyCategory,
    streets: &[(&str, &str, [i64; 10])],
) {
    for (id, name, [buy, mortgage, house, hotel, rent, h1, h2, h3, h4, hotel_rent]) in streets {
        let street = Property::street(
            *name,
            category.clone(),
            *buy,
            *mortgage,
            *house,
            *hotel,
            *rent,
            [*h1, *h2, *h3, *h4],
            *hotel_rent,
        );
        items.insert(id.to_string(), Item::Property(street));
    }
}

fn property(id: &str) -> Tile {
    Tile::Property { item: id.to_string() }
}

/// The 40-tile campus board.
#[must_use]
pub fn standard() -> Arc<Board> {
    let bookstore = Card::GoToProperty {
        property: "BLUE_2".to_string(),
        title: "Go shopping!".to_string(),
        body: "You toured some guests around Penn, and they predictably insisted on \
               going to the bookstore for overpriced merch. Proceed immediately to Penn \
               Bookstore."
            .to_string(),
    };

    let deck = vec![
        Card::Ownable(OwnableCard::get_out_of_jail_free()),
        Card::Ownable(OwnableCard::steal()),
        Card::Ownable(OwnableCard::kill()),
        clippy(),
        Card::Ownable(OwnableCard::instant_hotel()),
        Card::GoToJail,
        bookstore,
    ];

    let mut items = base_items();
    insert_card(&mut items, OwnableCard::steal());
    insert_card(&mut items, OwnableCard::kill());
    insert_card(&mut items, OwnableCard::instant_hotel());

    let groups: [(PropertyCategory, &[(&str, &str, [i64; 10])]); 8] = [
        (
            PropertyCategory::new("Brown", 0, [99, 51, 18]),
            &[
                ("BROWN_1", "DRL", [60, 30, 50, 50, 2, 10, 30, 90, 160, 250]),
                ("BROWN_2", "Hill House", [60, 30, 50, 50, 4, 20, 60, 180, 320, 450]),
            ],
        ),
        (
            PropertyCategory::new("Light Blue", 1, [114, 188, 204]),
            &[
                ("LIGHT_BLUE_1", "The Quad", [100, 50, 50, 50, 6, 30, 90, 270, 400, 550]),
                ("LIGHT_BLUE_2", "Van Pelt", [100, 50, 50, 50, 6, 30, 90, 270, 400, 550]),
                ("LIGHT_BLUE_3", "Pottruck", [120, 60, 50, 50, 8, 40, 100, 300, 450, 600]),
            ],
        ),
        (
            PropertyCategory::new("Magenta", 2, [179, 37, 131]),
            &[
                ("MAGENTA_1", "Kelly Writer's House", [140, 70, 100, 100, 10, 50, 150, 450, 625, 750]),
                ("MAGENTA_2", "Perry World House", [140, 70, 100, 100, 10, 50, 150, 450, 625, 750]),
                ("MAGENTA_3", "Class of 1920 Commons", [160, 80, 100, 100, 12, 60, 180, 500, 700, 900]),
            ],
        ),
        (
            PropertyCategory::new("Orange", 3, [245, 152, 12]),
            &[
                ("ORANGE_1", "Harnwell House", [180, 90, 100, 100, 14, 70, 200, 550, 750, 950]),
                ("ORANGE_2", "Harrison House", [180, 90, 100, 100, 14, 70, 200, 550, 750, 950]),
                ("ORANGE_3", "Rodin House", [200, 100, 100, 100, 16, 80, 220, 600, 800, 1000]),
            ],
        ),
        (
            PropertyCategory::new("Red", 4, [184, 13, 13]),
            &[
                ("RED_1", "KCEH", [220, 110, 150, 150, 18, 90, 250, 700, 875, 1050]),
                ("RED_2", "Gregory House", [220, 110, 150, 150, 18, 90, 250, 700, 875, 1050]),
                ("RED_3", "Guttman House", [240, 120, 150, 150, 20, 100, 300, 750, 925, 1100]),
            ],
        ),
        (
            PropertyCategory::new("Yellow", 5, [255, 238, 51]),
            &[
                ("YELLOW_1", "ARB", [260, 130, 150, 150, 22, 110, 330, 800, 975, 1150]),
                ("YELLOW_2", "Towne Building", [260, 130, 150, 150, 22, 110, 330, 800, 975, 1150]),
                ("YELLOW_3", "Houston Hall", [280, 140, 150, 150, 24, 120, 360, 850, 1025, 1200]),
            ],
        ),
        (
            PropertyCategory::new("Green", 6, [54, 171, 48]),
            &[
                ("GREEN_1", "Moore Building", [300, 150, 200, 200, 26, 130, 390, 900, 1100, 1275]),
                ("GREEN_2", "Skirkanich Hall", [300, 150, 200, 200, 26, 130, 390, 900, 1100, 1275]),
                ("GREEN_3", "Huntsman Hall", [320, 160, 200, 200, 28, 150, 450, 1000, 1200, 1400]),
            ],
        ),
        (
            PropertyCategory::new("Blue", 7, [45, 92, 186]),
            &[
                ("BLUE_1", "M&T Office", [350, 175, 200, 200, 35, 175, 500, 1100, 1300, 1500]),
                ("BLUE_2", "Penn Bookstore", [400, 200, 200, 200, 50, 200, 600, 1400, 1700, 2000]),
            ],
        ),
    ];
    for (category, streets) in &groups {
        insert_streets(&mut items, category, streets);
    }

    for (id, name) in [("UTILITY_1", "Path@Penn"), ("UTILITY_2", "Penn Dining")] {
        let utility = Property::utility(name, money(150), money(75), money(4), money(10));
        items.insert(id.to_string(), Item::Property(utility));
    }

    let railroad_rent = vec![money(25), money(50), money(100), money(200)];
    for (id, name) in [
        ("RAILROAD_1", "Spruce Street"),
        ("RAILROAD_2", "Walnut Street"),
        ("RAILROAD_3", "Woodland Walk"),
        ("RAILROAD_4", "Locust Walk"),
    ] {
        let railroad = Property::railroad(name, money(200), money(100), railroad_rent.clone());
        items.insert(id.to_string(), Item::Property(railroad));
    }

    let chance = Tile::Cards {
        name: "Chance".to_string(),
        deck: deck.clone(),
    };
    let community_chest = Tile::Cards {
        name: "Community Chest".to_string(),
        deck,
    };

    let tiles = vec![
        Tile::Go { reward: money(200) },
        property("BROWN_1"),
        community_chest.clone(),
        property("BROWN_2"),
        Tile::Tax {
            name: "Tuition".to_string(),
            tax: money(200),
        },
        property("RAILROAD_1"),
        property("LIGHT_BLUE_1"),
        chance.clone(),
        property("LIGHT_BLUE_2"),
        property("LIGHT_BLUE_3"),
        Tile::jail_default(),
        property("MAGENTA_1"),
        property("UTILITY_1"),
        property("MAGENTA_2"),
        property("MAGENTA_3"),
        property("RAILROAD_2"),
        property("ORANGE_1"),
        community_chest.clone(),
        property("ORANGE_2"),
        property("ORANGE_3"),
        Tile::FreeParking,
        property("RED_1"),
        chance.clone(),
        property("RED_2"),
        property("RED_3"),
        property("RAILROAD_3"),
        property("YELLOW_1"),
        property("YELLOW_2"),
        property("UTILITY_2"),
        property("YELLOW_3"),
        Tile::GoToJail,
        property("GREEN_1"),
        property("GREEN_2"),
        community_chest,
        property("GREEN_3"),
        property("RAILROAD_4"),
        chance,
        property("BLUE_1"),
        Tile::Tax {
            name: "Frat Party".to_string(),
            tax: money(100),
        },
        property("BLUE_2"),
    ];

    Arc::new(Board::new("Standard", tiles, items, money(1500)))
}

/// A 40-tile board with a single property and a jail in the corner.
#[must_use]
pub fn friendship_ending() -> Arc<Board> {
    let mut items = base_items();
    let sanity = Property::street(
        "Sanity",
        PropertyCategory::new("Good Luck", 0, [255, 0, 0]),
        10,
        -9999,
        1,
        1,
        2000,
        [3000, 4000, 5000, 6000],
        7000,
    );
    items.insert("PROPERTY".to_string(), Item::Property(sanity));

    let exploit = Card::Scripted(ScriptedCard::new(
        "Game-Breaking Exploit",
        "The only property on the board is now yours!",
        vec![CardChoice::new(
            "Sure I guess",
            vec![CardEffect::Seize {
                item: "PROPERTY".to_string(),
            }],
            CardOutcome::Done,
        )],
    ));
    let oh_no = Tile::Cards {
        name: "Oh no".to_string(),
        deck: vec![exploit, clippy(), Card::GoToJail],
    };

    let mut tiles = Vec::with_capacity(40);
    for _ in 0..4 {
        tiles.push(Tile::GoToJail);
        for j in 0..9 {
            if j % 3 == 1 {
                tiles.push(oh_no.clone());
            } else {
                tiles.push(property("PROPERTY"));
            }
        }
    }
    tiles[0] = Tile::jail_default();

    Arc::new(Board::new("Hate Your Fellow TAs?", tiles, items, money(1500)))
}

/// A 40-tile free-for-all: every card is a kill card.
#[must_use]
pub fn deathmatch() -> Arc<Board> {
    let kill = OwnableCard::kill();
    let anti_kill = OwnableCard::new(
        "ANTI_KILL",
        "Private Investigator",
        "Removes all Amogus Sus cards from play. Can only be used once per game.",
        "PI",
        CardPower::Purge {
            item: kill.id.clone(),
        },
    );

    let mut items = BTreeMap::new();
    let start_items = Ledger::single(anti_kill.id.clone(), 1);
    insert_card(&mut items, kill.clone());
    insert_card(&mut items, anti_kill);

    let cards = Tile::Cards {
        name: "!!!".to_string(),
        deck: vec![Card::Ownable(kill)],
    };

    let mut tiles = Vec::with_capacity(40);
    for _ in 0..4 {
        tiles.push(Tile::FreeParking);
        for j in 0..9 {
            if j % 3 == 1 {
                tiles.push(cards.clone());
            } else {
                tiles.push(Tile::FreeParking);
            }
        }
    }

    Arc::new(Board::new("Deathmatch", tiles, items, start_items))
}
