//! Sample data the catalog starts with.

use crate::types::{CatalogState, Category, Product, ProductId};

const SAMPLES: [(&str, Category, f64, u32, &str); 10] = [
    ("iPhone 15 Pro", Category::Electronics, 25_000_000.0, 10, "Điện thoại flagship của Apple."),
    ("Áo Thun Nam", Category::Clothing, 150_000.0, 50, "Áo thun cotton co dãn."),
    ("Bánh Mì Việt", Category::Food, 20_000.0, 100, "Bánh mì nóng mỗi sáng."),
    ("Gatsby - Văn học", Category::Books, 120_000.0, 20, "Tiểu thuyết kinh điển."),
    ("Tai nghe Bluetooth", Category::Electronics, 800_000.0, 25, "Tai nghe không dây, pin lâu."),
    ("Quần Jean Nữ", Category::Clothing, 350_000.0, 30, "Quần jean co giãn thoải mái."),
    ("Snack Khoai Tây", Category::Food, 25_000.0, 60, "Snack giòn, vị truyền thống."),
    ("Sách Lập Trình TS", Category::Books, 300_000.0, 15, "Học TypeScript từ cơ bản đến nâng cao."),
    ("Sạc Dự Phòng 10k mAh", Category::Electronics, 450_000.0, 40, "Sạc nhanh, nhỏ gọn."),
    ("Mũ Lưỡi Trai", Category::Clothing, 120_000.0, 45, "Mũ thời trang unisex."),
];

/// The ten sample products, ids 1 through 10
#[must_use]
pub fn sample_products() -> Vec<Product> {
    SAMPLES
        .iter()
        .zip(1_u64..)
        .map(|(&(name, category, price, quantity, description), id)| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category,
            price,
            quantity,
            description: description.to_string(),
        })
        .collect()
}

/// A catalog holding the sample products, next id 11
#[must_use]
pub fn sample_catalog() -> CatalogState {
    CatalogState::with_products(sample_products())
}
