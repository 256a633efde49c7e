//! Cart queries and mutations.

pub const CART_FRAGMENT: &str = r#"
  fragment CartFields on Cart {
    id
    checkoutUrl
    totalQuantity
    cost {
      subtotalAmount {
        amount
        currencyCode
      }
      totalAmount {
        amount
        currencyCode
      }
    }
    lines(first: 100) {
      nodes {
        id
        quantity
        merchandise {
          ... on ProductVariant {
            id
            title
            image {
              id
              url
              altText
              width
              height
            }
            selectedOptions {
              name
              value
            }
          }
        }
      }
    }
  }
"#;

pub const CART_QUERY: &str = r#"#graphql
  query CartQuery($cartId: ID!, $country: CountryCode, $language: LanguageCode)
    @inContext(country: $country, language: $language) {
    cart(id: $cartId) {
      ...CartFields
    }
  }
"#;

pub const CART_CREATE_MUTATION: &str = r#"#graphql
  mutation CartCreate($input: CartInput!, $country: CountryCode)
    @inContext(country: $country) {
    cartCreate(input: $input) {
      cart {
        ...CartFields
      }
      userErrors {
        message
        field
        code
      }
    }
  }
"#;

pub const CART_LINES_ADD_MUTATION: &str = r#"#graphql
  mutation CartLinesAdd($cartId: ID!, $lines: [CartLineInput!]!, $country: CountryCode)
    @inContext(country: $country) {
    cartLinesAdd(cartId: $cartId, lines: $lines) {
      cart {
        ...CartFields
      }
      userErrors {
        message
        field
        code
      }
    }
  }
"#;

pub const CART_LINES_REMOVE_MUTATION: &str = r#"#graphql
  mutation CartLinesRemove($cartId: ID!, $lineIds: [ID!]!, $country: CountryCode)
    @inContext(country: $country) {
    cartLinesRemove(cartId: $cartId, lineIds: $lineIds) {
      cart {
        ...CartFields
      }
      userErrors {
        message
        field
        code
      }
    }
  }
"#;
