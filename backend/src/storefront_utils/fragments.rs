//! GraphQL fragments shared by several page queries.

/// Fields a product card renders.
pub const PRODUCT_CARD_FRAGMENT: &str = r#"
  fragment ProductCard on Product {
    id
    title
    publishedAt
    handle
    variants(first: 1) {
      nodes {
        id
        title
        availableForSale
        image {
          id
          url
          altText
          width
          height
        }
        price {
          amount
          currencyCode
        }
        compareAtPrice {
          amount
          currencyCode
        }
        selectedOptions {
          name
          value
        }
      }
    }
  }
"#;

/// Appends the fragments a query spreads.
pub fn with_fragments(query: &str, fragments: &[&str]) -> String {
    let mut full = query.to_string();
    for fragment in fragments {
        full.push_str(fragment);
    }
    full
}
