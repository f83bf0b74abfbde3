use super::repository;
use contracts::domain::a001_catalog::{CatalogSnapshot, Category, Product, Subcategory};
use contracts::shared::catalog_filter::CatalogIndex;

/// Получение списка категорий
pub async fn list_categories() -> anyhow::Result<Vec<Category>> {
    repository::list_categories().await
}

/// Получение списка подкатегорий
pub async fn list_subcategories() -> anyhow::Result<Vec<Subcategory>> {
    repository::list_subcategories().await
}

/// Получение списка товаров (без серверной фильтрации)
pub async fn list_products() -> anyhow::Result<Vec<Product>> {
    repository::list_products().await
}

/// Проверка ссылочной целостности каталога.
/// Возвращает предупреждения; ошибкой загрузки это не считается.
pub fn check_integrity(snapshot: &CatalogSnapshot) -> Vec<String> {
    let index = CatalogIndex::build(snapshot.categories.clone(), snapshot.subcategories.clone());
    let mut warnings = Vec::new();

    for subcategory in &snapshot.subcategories {
        if index.category(subcategory.category_id).is_none() {
            warnings.push(format!(
                "subcategory {} references unknown category {}",
                subcategory.id.value(),
                subcategory.category_id.value()
            ));
        }
    }

    for product in &snapshot.products {
        let Some(category) = index.category(product.category_id) else {
            warnings.push(format!(
                "product {} references unknown category {}",
                product.id.value(),
                product.category_id.value()
            ));
            continue;
        };
        if !category.parent_segment.eq_ignore_ascii_case(&product.segment) {
            warnings.push(format!(
                "product {} is in segment {} but its category {} is in {}",
                product.id.value(),
                product.segment,
                category.slug,
                category.parent_segment
            ));
        }
        if let Some(subcategory_id) = product.subcategory_id {
            match index.subcategory(subcategory_id) {
                None => warnings.push(format!(
                    "product {} references unknown subcategory {}",
                    product.id.value(),
                    subcategory_id.value()
                )),
                Some(subcategory) if subcategory.category_id != product.category_id => {
                    warnings.push(format!(
                        "product {} subcategory {} belongs to category {}, not {}",
                        product.id.value(),
                        subcategory.slug,
                        subcategory.category_id.value(),
                        product.category_id.value()
                    ))
                }
                Some(_) => {}
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::catalog_store::embedded_seed;
    use contracts::domain::a001_catalog::{CategoryId, ProductId, SubcategoryId};

    #[test]
    fn test_embedded_seed_is_consistent() {
        let snapshot = embedded_seed().unwrap();
        assert!(check_integrity(&snapshot).is_empty());
    }

    #[test]
    fn test_reports_broken_references() {
        let mut snapshot = embedded_seed().unwrap();
        snapshot.subcategories.push(Subcategory {
            id: SubcategoryId(900),
            category_id: CategoryId(999),
            name: "Orphans".into(),
            slug: "orphans".into(),
        });
        let mut product = snapshot.products[0].clone();
        product.id = ProductId(9000);
        product.subcategory_id = Some(SubcategoryId(107));
        snapshot.products.push(product);

        let mut stray = snapshot.products[0].clone();
        stray.id = ProductId(9001);
        stray.category_id = CategoryId(12345);
        snapshot.products.push(stray);

        let warnings = check_integrity(&snapshot);
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("unknown category 999"));
        assert!(warnings[1].contains("product 9000"));
        assert!(warnings[2].contains("product 9001"));
    }
}
