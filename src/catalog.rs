//! Static lookup tables for the eight rental categories.
//!
//! Every table is keyed by [`Category`], so a category can never be missing
//! its wire label, folder slug, search query or name pool.

/// A rental category of the RentReturn demo catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    Vehicles,
    BooksStationery,
    SportsFitness,
    HomeAppliances,
    Furniture,
    ToolsEquipment,
    Services,
}

impl Category {
    /// All categories, in the order the seeding tools walk them.
    pub const ALL: [Category; 8] = [
        Category::Electronics,
        Category::Vehicles,
        Category::BooksStationery,
        Category::SportsFitness,
        Category::HomeAppliances,
        Category::Furniture,
        Category::ToolsEquipment,
        Category::Services,
    ];

    /// Human-readable label, as stored in the backend's `category` column.
    pub fn label(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Vehicles => "Vehicles",
            Category::BooksStationery => "Books & Stationery",
            Category::SportsFitness => "Sports & Fitness",
            Category::HomeAppliances => "Home Appliances",
            Category::Furniture => "Furniture",
            Category::ToolsEquipment => "Tools & Equipment",
            Category::Services => "Services",
        }
    }

    /// Filesystem- and URL-safe identifier, used for per-category asset
    /// folders and downloaded image filenames.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Vehicles => "vehicles",
            Category::BooksStationery => "books-stationery",
            Category::SportsFitness => "sports-fitness",
            Category::HomeAppliances => "home-appliances",
            Category::Furniture => "furniture",
            Category::ToolsEquipment => "tools-equipment",
            Category::Services => "services",
        }
    }

    /// Unsplash search query that yields plausible stock photos for the
    /// category.
    pub fn search_query(self) -> &'static str {
        match self {
            Category::Electronics => "electronics gadgets technology",
            Category::Vehicles => "vehicles cars bikes",
            Category::BooksStationery => "books stationery reading",
            Category::SportsFitness => "sports fitness gym",
            Category::HomeAppliances => "home appliances kitchen",
            Category::Furniture => "furniture home decor",
            Category::ToolsEquipment => "tools equipment hardware",
            Category::Services => "service people working",
        }
    }

    /// Canned product names to synthesize records from.
    pub fn name_pool(self) -> &'static [&'static str] {
        match self {
            Category::Electronics => &[
                "Laptop", "Camera", "Tablet", "Smartphone", "Headphones",
                "Speaker", "Monitor", "Projector", "Printer", "Router",
                "Smartwatch", "VR Headset", "Microphone", "Drone",
                "Power Bank", "E-Reader", "Webcam", "Graphics Card",
                "Game Console", "Bluetooth Adapter",
            ],
            Category::Vehicles => &[
                "Mountain Bike", "Scooter", "Car", "Motorbike",
                "Electric Bike", "Skateboard", "Rollerblades", "SUV",
                "Convertible", "Truck", "Van", "Road Bike", "Hybrid Bike",
                "Pickup Truck", "Minivan", "Cargo Bike", "Sports Car",
                "Electric Scooter", "Moped", "ATV",
            ],
            Category::BooksStationery => &[
                "Textbook", "Notebook", "Novel", "Pen Set",
                "Highlighter Pack", "Calculator", "Dictionary", "Atlas",
                "Sketchbook", "Binder", "Folder", "Sticky Notes", "Planner",
                "Journal", "Graph Paper", "Ruler Set", "Eraser Pack",
                "Stapler", "Clipboard", "Index Cards",
            ],
            Category::SportsFitness => &[
                "Football", "Tennis Racket", "Yoga Mat", "Dumbbells",
                "Treadmill", "Basketball", "Cricket Bat", "Badminton Set",
                "Jump Rope", "Resistance Bands", "Golf Clubs",
                "Boxing Gloves", "Swim Goggles", "Hockey Stick",
                "Baseball Glove", "Elliptical Trainer", "Rowing Machine",
                "Pull-up Bar", "Exercise Bike", "Kettlebell",
            ],
            Category::HomeAppliances => &[
                "Microwave", "Refrigerator", "Washing Machine",
                "Air Conditioner", "Heater", "Vacuum Cleaner", "Blender",
                "Toaster", "Coffee Maker", "Dishwasher", "Water Purifier",
                "Iron", "Fan", "Rice Cooker", "Oven", "Juicer",
                "Food Processor", "Induction Cooktop", "Geyser",
                "Mixer Grinder",
            ],
            Category::Furniture => &[
                "Office Chair", "Desk", "Bookshelf", "Sofa", "Dining Table",
                "Bed", "Wardrobe", "Coffee Table", "TV Stand", "Recliner",
                "Futon", "Dresser", "Nightstand", "Bar Stool", "Shoe Rack",
                "Filing Cabinet", "Bean Bag", "Rocking Chair", "Patio Set",
                "Cupboard",
            ],
            Category::ToolsEquipment => &[
                "Drill Machine", "Hammer", "Screwdriver Set", "Ladder",
                "Saw", "Wrench Set", "Measuring Tape", "Toolbox", "Chainsaw",
                "Angle Grinder", "Sander", "Paint Sprayer", "Tile Cutter",
                "Wheelbarrow", "Pipe Wrench", "Socket Set", "Pliers",
                "Chisel Set", "Level", "Stud Finder",
            ],
            Category::Services => &[
                "Event Planning", "Cleaning Service", "Moving Help",
                "Tutoring", "Photography", "Catering", "DJ Service",
                "Gardening", "Babysitting", "Pet Sitting", "Laundry Service",
                "Car Wash", "Home Repair", "Personal Training",
                "Makeup Artist", "Interior Design", "Language Lessons",
                "Music Lessons", "Tech Support", "Bike Repair",
            ],
        }
    }
}
