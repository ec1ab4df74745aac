//! Fixture products loaded into a fresh catalog.

use std::collections::BTreeMap;

use catalog::models::Product;

fn specs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn product(
    name: &str,
    brand: &str,
    price: f64,
    image_url: &str,
    description: &str,
    category: &str,
    rating: f64,
    spec_pairs: &[(&str, &str)],
) -> Product {
    Product {
        name: name.to_string(),
        brand: brand.to_string(),
        price,
        image_url: image_url.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        rating,
        specs: specs(spec_pairs),
    }
}

/// The six products every fresh catalog starts with.
pub fn products() -> Vec<Product> {
    vec![
        product(
            "Samsung Galaxy S23",
            "Samsung",
            999.99,
            "https://images.samsung.com/is/image/samsung/p6pim/ar/2302/gallery/ar-galaxy-s23-s911-sm-s911bzaaaro-534851967",
            "Premium smartphone with a 50MP camera and a 6.1-inch AMOLED display",
            "Smartphones",
            4.5,
            &[
                ("screen_size", "6.1 inches"),
                ("storage", "128GB"),
                ("ram", "8GB"),
                ("camera", "50MP"),
                ("battery", "3900mAh"),
                ("processor", "Snapdragon 8 Gen 2"),
            ],
        ),
        product(
            "iPhone 15",
            "Apple",
            1199.99,
            "https://store.storeimages.cdn-apple.com/4982/as-images.apple.com/is/iphone-15-finish-select-202309-6-1inch-blue",
            "iPhone with the A17 Pro chip and a 48MP main camera",
            "Smartphones",
            4.7,
            &[
                ("screen_size", "6.1 inches"),
                ("storage", "128GB"),
                ("ram", "8GB"),
                ("camera", "48MP"),
                ("battery", "3349mAh"),
                ("processor", "A17 Pro"),
            ],
        ),
        product(
            "MacBook Air M2",
            "Apple",
            1499.99,
            "https://store.storeimages.cdn-apple.com/4982/as-images.apple.com/is/macbook-air-midnight-select-20220606",
            "Ultra-thin laptop with the M2 chip and a 13.6-inch Liquid Retina display",
            "Laptops",
            4.8,
            &[
                ("screen_size", "13.6 inches"),
                ("storage", "256GB SSD"),
                ("ram", "8GB"),
                ("processor", "Apple M2"),
                ("battery", "18 hours"),
                ("weight", "1.24 kg"),
            ],
        ),
        product(
            "Google Pixel 8",
            "Google",
            899.99,
            "https://lh3.googleusercontent.com/RMkx7Ap8nZhGHqDv8C_a5c8oEjnM_Zqp5GVRU1v7o2g",
            "Smartphone with advanced AI and computational photography",
            "Smartphones",
            4.4,
            &[
                ("screen_size", "6.2 inches"),
                ("storage", "128GB"),
                ("ram", "8GB"),
                ("camera", "50MP"),
                ("battery", "4575mAh"),
                ("processor", "Tensor G3"),
            ],
        ),
        product(
            "Dell XPS 13",
            "Dell",
            1299.99,
            "https://i.dell.com/is/image/DellContent/content/dam/ss2/product-images/dell-client-products/notebooks/xps-notebooks/xps-13-9315",
            "Ultraportable laptop with an InfinityEdge display and an Intel processor",
            "Laptops",
            4.3,
            &[
                ("screen_size", "13.4 inches"),
                ("storage", "512GB SSD"),
                ("ram", "16GB"),
                ("processor", "Intel i7-1250U"),
                ("battery", "12 hours"),
                ("weight", "1.17 kg"),
            ],
        ),
        product(
            "Samsung Galaxy Book3 Pro",
            "Samsung",
            1449.99,
            "https://images.samsung.com/is/image/samsung/p6pim/us/np940xfg-kc1us/gallery/us-galaxy-book3-pro-14-inch-np940xfg-kc1us-535174614",
            "Lightweight laptop with a 14-inch Dynamic AMOLED 2X display and a 13th gen Intel processor",
            "Laptops",
            4.4,
            &[
                ("screen_size", "14 inches"),
                ("storage", "512GB SSD"),
                ("ram", "16GB"),
                ("processor", "Intel i7-1360P"),
                ("battery", "15 hours"),
                ("weight", "1.17 kg"),
            ],
        ),
    ]
}
