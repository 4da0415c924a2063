//! Static food table
//!
//! Per-serving nutrition for the foods the local parser understands.
//! Values: calories, protein, carbs, sugar, fat (g). The first key of each
//! entry is its canonical key; the rest are aliases.

use crate::models::{FoodItem, MacroBreakdown};

const fn food(
    name: &'static str,
    serving: &'static str,
    macros: [u32; 5],
    keys: &'static [&'static str],
) -> FoodItem {
    FoodItem::new(
        name,
        serving,
        MacroBreakdown::new(macros[0], macros[1], macros[2], macros[3], macros[4]),
        keys,
    )
}

pub static FOODS: &[FoodItem] = &[
    // --- Fast food ---
    food("Big Mac", "1 burger", [550, 25, 45, 9, 30], &["big mac"]),
    food("McDouble", "1 burger", [400, 22, 33, 7, 20], &["mcdouble"]),
    food("Cheeseburger", "1 burger", [300, 15, 32, 7, 13], &["cheeseburger", "cheese burger"]),
    food("Hamburger", "1 burger", [250, 12, 31, 6, 9], &["hamburger", "burger"]),
    food("McChicken", "1 sandwich", [400, 14, 39, 5, 21], &["mcchicken"]),
    food(
        "Chicken Nuggets",
        "1 piece",
        [45, 2, 3, 0, 3],
        &["chicken nuggets", "chicken nugget", "mcnuggets", "nuggets", "nugget"],
    ),
    food("Small Fries", "small order", [230, 3, 29, 0, 11], &["small fries"]),
    food(
        "Medium Fries",
        "medium order",
        [320, 5, 43, 0, 15],
        &["fries", "medium fries", "french fries"],
    ),
    food("Large Fries", "large order", [510, 6, 66, 0, 24], &["large fries"]),
    food(
        "Filet-O-Fish",
        "1 sandwich",
        [390, 16, 39, 5, 19],
        &["filet-o-fish", "filet o fish", "fish sandwich"],
    ),
    food("Egg McMuffin", "1 sandwich", [310, 17, 30, 3, 13], &["egg mcmuffin", "mcmuffin"]),
    food("Hash Brown", "1 patty", [140, 1, 15, 0, 8], &["hash brown", "hash browns", "hashbrown"]),
    food("Whopper", "1 burger", [670, 31, 51, 11, 40], &["whopper"]),
    food("Turkey Sub", "6 inch", [280, 18, 46, 7, 4], &["turkey sub", "sub", "footlong"]),
    food("Chicken Sandwich", "1 sandwich", [440, 28, 40, 6, 17], &["chicken sandwich"]),
    food("Turkey Sandwich", "1 sandwich", [320, 24, 35, 5, 9], &["turkey sandwich", "sandwich"]),
    food("Pizza", "1 slice", [285, 12, 36, 4, 10], &["pizza", "cheese pizza"]),
    food("Pepperoni Pizza", "1 slice", [313, 13, 35, 4, 13], &["pepperoni pizza"]),
    food("Chicken Burrito", "1 burrito", [650, 40, 70, 4, 22], &["chicken burrito", "burrito"]),
    food("Taco", "1 taco", [170, 8, 13, 1, 9], &["taco", "tacos"]),
    food("Hot Dog", "1 hot dog", [290, 11, 24, 4, 17], &["hot dog", "hotdog", "hot dogs"]),
    // --- Proteins ---
    food("Chicken Breast", "100 g", [165, 31, 0, 0, 4], &["chicken breast", "chicken"]),
    food("Fried Chicken", "1 piece", [290, 20, 9, 0, 19], &["fried chicken"]),
    food("Steak", "8 oz", [460, 60, 0, 0, 24], &["steak", "sirloin"]),
    food("Salmon", "6 oz", [367, 34, 0, 0, 22], &["salmon"]),
    food("Tuna", "1 can", [132, 29, 0, 0, 1], &["tuna"]),
    food("Egg", "1 large egg", [78, 6, 1, 1, 5], &["egg", "eggs"]),
    food("Bacon", "1 slice", [43, 3, 0, 0, 3], &["bacon"]),
    // --- Grains ---
    food("White Rice", "1 cup", [205, 4, 45, 0, 0], &["rice", "white rice"]),
    food("Brown Rice", "1 cup", [216, 5, 45, 1, 2], &["brown rice"]),
    food("Pasta", "1 cup", [220, 8, 43, 1, 1], &["pasta", "spaghetti", "noodles"]),
    food(
        "Mac and Cheese",
        "1 cup",
        [310, 11, 35, 5, 14],
        &["mac and cheese", "macaroni and cheese", "mac n cheese", "mac & cheese"],
    ),
    food("Bread", "1 slice", [80, 3, 14, 2, 1], &["bread", "toast"]),
    food("Bagel", "1 bagel", [270, 11, 53, 6, 2], &["bagel"]),
    food("Oatmeal", "1 cup", [158, 6, 27, 1, 3], &["oatmeal", "oats", "porridge"]),
    food("Cereal", "1 cup", [110, 2, 24, 6, 1], &["cereal"]),
    food("Pancake", "1 pancake", [90, 2, 11, 2, 4], &["pancake", "pancakes"]),
    // --- Fruit and vegetables ---
    food("Banana", "1 medium", [105, 1, 27, 14, 0], &["banana", "bananas"]),
    food("Apple", "1 medium", [95, 0, 25, 19, 0], &["apple", "apples"]),
    food("Orange", "1 medium", [62, 1, 15, 12, 0], &["orange", "oranges"]),
    food("Strawberries", "1 cup", [49, 1, 12, 7, 0], &["strawberries", "strawberry"]),
    food("Grapes", "1 cup", [104, 1, 27, 23, 0], &["grapes"]),
    food("Avocado", "1 avocado", [240, 3, 13, 1, 22], &["avocado", "guacamole"]),
    food("Side Salad", "1 bowl", [35, 2, 7, 3, 0], &["salad", "side salad", "garden salad"]),
    food("Caesar Salad", "1 bowl", [190, 7, 10, 2, 14], &["caesar salad"]),
    food("Broccoli", "1 cup", [55, 4, 11, 2, 1], &["broccoli"]),
    // --- Dairy and snacks ---
    food("Greek Yogurt", "1 cup", [100, 17, 6, 4, 1], &["greek yogurt", "yogurt", "yoghurt"]),
    food("Milk", "1 cup", [122, 8, 12, 12, 5], &["milk"]),
    food("Cheese", "1 oz", [113, 7, 0, 0, 9], &["cheese"]),
    food("Peanut Butter", "2 tbsp", [190, 7, 7, 3, 16], &["peanut butter"]),
    food("Almonds", "1 oz", [164, 6, 6, 1, 14], &["almonds", "nuts"]),
    food("Protein Bar", "1 bar", [200, 20, 22, 6, 7], &["protein bar"]),
    food("Protein Shake", "1 scoop", [160, 30, 5, 2, 3], &["protein shake"]),
    food("Chocolate Chip Cookie", "1 cookie", [160, 2, 21, 11, 8], &["cookie", "cookies"]),
    food("Donut", "1 donut", [250, 3, 31, 14, 13], &["donut", "donuts", "doughnut"]),
    food("Ice Cream", "1 cup", [270, 5, 32, 28, 14], &["ice cream"]),
    food("Apple Pie", "1 slice", [230, 2, 32, 13, 11], &["apple pie"]),
    food("Potato Chips", "1 oz", [150, 2, 15, 0, 10], &["chips", "potato chips"]),
    // --- Drinks ---
    food("Chocolate Milkshake", "16 oz", [530, 12, 86, 74, 15], &["milkshake", "shake"]),
    food("Coca-Cola", "12 oz can", [140, 0, 39, 39, 0], &["coke", "soda", "cola", "coca cola"]),
    food("Diet Coke", "12 oz can", [0, 0, 0, 0, 0], &["diet coke", "diet soda"]),
    food("Orange Juice", "8 oz", [110, 2, 26, 22, 0], &["orange juice", "oj"]),
    food("Coffee", "8 oz", [2, 0, 0, 0, 0], &["coffee", "black coffee"]),
    food("Latte", "16 oz", [190, 13, 19, 17, 7], &["latte"]),
    food("Beer", "12 oz", [153, 2, 13, 0, 0], &["beer", "beers"]),
    food("Wine", "5 oz glass", [125, 0, 4, 1, 0], &["wine"]),
];

/// Phrases that are tried when no catalog key matched directly.
/// Each target must be an exact catalog key.
pub static SYNONYMS: &[(&str, &str)] = &[
    ("grilled chicken", "chicken"),
    ("chicken breasts", "chicken breast"),
    ("cup of rice", "rice"),
    ("bowl of rice", "rice"),
    ("scrambled eggs", "eggs"),
    ("fried eggs", "eggs"),
    ("pop", "soda"),
    ("soft drink", "soda"),
    ("french toast", "toast"),
    ("spuds", "fries"),
    ("joe", "coffee"),
    ("espresso", "coffee"),
    ("cappuccino", "latte"),
    ("pb", "peanut butter"),
];

/// Restaurant phrases stripped from an utterance before segmentation,
/// tried in order; at most one is removed.
pub static RESTAURANTS: &[&str] = &[
    "from mcdonald's",
    "from mcdonalds",
    "at mcdonald's",
    "at mcdonalds",
    "from burger king",
    "at burger king",
    "from taco bell",
    "at taco bell",
    "from subway",
    "at subway",
    "from wendy's",
    "from wendys",
    "from chipotle",
    "from starbucks",
    "at starbucks",
    "from kfc",
    "mcdonald's",
    "mcdonalds",
    "burger king",
    "taco bell",
    "subway",
    "wendy's",
    "wendys",
    "chipotle",
    "starbucks",
    "kfc",
];
