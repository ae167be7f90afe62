// src/dispatch/catalog.rs

//! Static result catalogs. Order is rank; nothing here is sorted or scored.

use crate::model::ResultItem;

type Row = (&'static str, &'static str, &'static str, &'static str, f32);

fn build(rows: &[Row]) -> Vec<ResultItem> {
    rows.iter()
        .enumerate()
        .map(|(i, (title, description, url, price, rating))| {
            ResultItem::new(i + 1, title, description, url)
                .priced(price)
                .rated(*rating)
        })
        .collect()
}

pub(super) fn laptops() -> Vec<ResultItem> {
    build(&[
        (
            "ASUS VivoBook 15 OLED - Intel Core i5-13500H, 16GB RAM, 512GB SSD",
            "15.6\" OLED display, excellent color accuracy, lightweight design. Perfect for productivity and content creation.",
            "https://amazon.com/asus-vivobook-15-oled",
            "$899",
            4.6,
        ),
        (
            "Acer Swift 3 - AMD Ryzen 7 5700U, 8GB RAM, 512GB NVMe SSD",
            "Ultra-portable with all-day battery life. Premium aluminum build with backlit keyboard.",
            "https://bestbuy.com/acer-swift-3-ryzen7",
            "$749",
            4.4,
        ),
        (
            "HP Pavilion 15 - Intel Core i7-1255U, 16GB DDR4, 512GB SSD",
            "Balanced performance laptop with numeric keypad. Great for students and professionals.",
            "https://hp.com/pavilion-15-i7",
            "$849",
            4.3,
        ),
        (
            "Lenovo IdeaPad 3 Gaming - AMD Ryzen 5 5600H, GTX 1650, 8GB RAM",
            "Entry-level gaming laptop with dedicated graphics. 120Hz display for smooth gaming.",
            "https://lenovo.com/ideapad-3-gaming",
            "$699",
            4.2,
        ),
        (
            "MSI Modern 14 - Intel Core i5-1235U, 16GB LPDDR5, 512GB SSD",
            "Business-focused ultrabook with military-grade durability. Carbon grey finish.",
            "https://newegg.com/msi-modern-14-i5",
            "$799",
            4.5,
        ),
    ])
}

pub(super) fn flights() -> Vec<ResultItem> {
    build(&[
        (
            "JetBlue Airways B6 423 - Nonstop",
            "JFK to LAX • Dec 4, 8:30 AM - 11:45 AM PST • A321neo with Mint available",
            "https://jetblue.com/book-flight-b6423",
            "$298",
            4.2,
        ),
        (
            "Delta Air Lines DL 1243 - Nonstop",
            "LGA to LAX • Dec 4, 6:00 AM - 9:15 AM PST • Boeing 757-200 with WiFi",
            "https://delta.com/book/dl1243",
            "$342",
            4.4,
        ),
        (
            "American Airlines AA 31 - Nonstop",
            "JFK to LAX • Dec 4, 10:15 AM - 1:35 PM PST • Airbus A321T with lie-flat seats",
            "https://aa.com/booking/aa31",
            "$389",
            4.1,
        ),
        (
            "United Airlines UA 1 - Nonstop",
            "EWR to LAX • Dec 4, 7:05 AM - 10:20 AM PST • Boeing 757-200 with Premium Plus",
            "https://united.com/book-ua1",
            "$356",
            4.0,
        ),
        (
            "Alaska Airlines AS 6 - Nonstop",
            "JFK to LAX • Dec 4, 11:59 PM - 3:25 AM+1 PST • Red-eye flight, significant savings",
            "https://alaskaair.com/book-as6",
            "$198",
            3.9,
        ),
    ])
}

pub(super) fn iphone_prices() -> Vec<ResultItem> {
    build(&[
        (
            "iPhone 15 Pro 128GB Natural Titanium - Apple Store",
            "Official Apple pricing with trade-in options. Free shipping and AppleCare+ available.",
            "https://apple.com/iphone-15-pro",
            "$999",
            4.8,
        ),
        (
            "iPhone 15 Pro 128GB Natural Titanium - Amazon",
            "Unlocked for all carriers. Prime shipping available. 30-day return policy.",
            "https://amazon.com/iphone-15-pro-128gb",
            "$949",
            4.6,
        ),
        (
            "iPhone 15 Pro 128GB Natural Titanium - Best Buy",
            "Carrier deals available. Geek Squad setup included. Price match guarantee.",
            "https://bestbuy.com/iphone-15-pro",
            "$999",
            4.5,
        ),
        (
            "iPhone 15 Pro 128GB Natural Titanium - Costco",
            "Members get additional $100 off with activation. Includes accessories bundle.",
            "https://costco.com/iphone-15-pro-deal",
            "$899",
            4.7,
        ),
        (
            "iPhone 15 Pro 128GB Natural Titanium - Verizon",
            "Up to $1000 off with trade-in and unlimited plan. 5G network included.",
            "https://verizon.com/iphone-15-pro-offer",
            "$599",
            4.3,
        ),
    ])
}

pub(super) fn restaurants() -> Vec<ResultItem> {
    build(&[
        (
            "Osteria Mozza - West Hollywood",
            "Upscale Italian with house-made pasta. Celebrity chef Nancy Silverton. Reservations via OpenTable.",
            "https://opentable.com/osteria-mozza",
            "$$$",
            4.6,
        ),
        (
            "Guelaguetza - Koreatown",
            "Family-owned since 1994. Authentic Roman cuisine with wood-fired pizza. Available tonight 7:30 PM.",
            "https://resy.com/guelaguetza-italian",
            "$$",
            4.5,
        ),
        (
            "Bestia - Arts District",
            "Industrial-chic spot known for charcuterie and bone marrow. Busy atmosphere, book ahead.",
            "https://opentable.com/bestia-la",
            "$$$",
            4.4,
        ),
        (
            "Republique - Mid-City",
            "French-Italian bistro in historic building. Great for dates. Weekend brunch available.",
            "https://resy.com/republique",
            "$$$",
            4.7,
        ),
        (
            "Pizzana - Brentwood",
            "Neapolitan pizza with creative toppings. Casual dining, good for families. Walk-ins welcome.",
            "https://pizzana.com/reservations",
            "$$",
            4.3,
        ),
    ])
}

pub(super) fn python_jobs() -> Vec<ResultItem> {
    build(&[
        (
            "Senior Python Developer - Stripe",
            "Build payment infrastructure at scale. 5+ years Python, Django/Flask. $180k-$250k + equity.",
            "https://stripe.com/jobs/senior-python-dev",
            "$180k-$250k",
            4.8,
        ),
        (
            "Python Backend Engineer - Airbnb",
            "Work on core platform services. Python, microservices, AWS. Remote-friendly. $160k-$220k.",
            "https://airbnb.com/careers/python-backend",
            "$160k-$220k",
            4.6,
        ),
        (
            "Machine Learning Engineer - OpenAI",
            "Build next-gen AI systems. Python, PyTorch, distributed computing. $200k-$300k + significant equity.",
            "https://openai.com/jobs/ml-engineer",
            "$200k-$300k",
            4.9,
        ),
        (
            "Full Stack Python Developer - Uber",
            "Rider/Driver platform development. Python, React, PostgreSQL. $150k-$200k + RSUs.",
            "https://uber.com/careers/fullstack-python",
            "$150k-$200k",
            4.2,
        ),
        (
            "Python Data Engineer - Salesforce",
            "Data pipeline architecture. Python, Spark, Snowflake. Great benefits. $140k-$190k.",
            "https://salesforce.com/jobs/data-engineer-python",
            "$140k-$190k",
            4.4,
        ),
    ])
}

pub(super) fn generic() -> Vec<ResultItem> {
    build(&[
        (
            "Sample Result 1",
            "This is a mock result based on your search query. Real results would be extracted from actual websites.",
            "https://example.com/result-1",
            "$99",
            4.0,
        ),
        (
            "Sample Result 2",
            "Another example result with relevant information from web scraping.",
            "https://example.com/result-2",
            "$149",
            4.3,
        ),
    ])
}
