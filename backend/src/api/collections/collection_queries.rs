//! GraphQL for the collection listing.

pub const COLLECTION_QUERY: &str = r#"#graphql
  query CollectionDetails(
      $handle: String!,
      $filters: [ProductFilter!]
      $sortKey: ProductCollectionSortKeys!
      $reverse: Boolean
      $first: Int
      $last: Int
      $startCursor: String
      $endCursor: String
      $allCollections: Int
    ) {
    collection(handle: $handle) {
      id
      title
      description
      handle
      seo {
        description
        title
      }
      image {
        id
        url
        width
        height
        altText
      }
      products(
        first: $first,
        last: $last,
        before: $startCursor,
        after: $endCursor,
        filters: $filters,
        sortKey: $sortKey,
        reverse: $reverse
      ) {
        pageInfo {
          hasNextPage
          hasPreviousPage
          startCursor
          endCursor
        }
        filters {
          id
          label
          type
          values {
            id
            label
            count
            input
          }
        }
        nodes {
          ...ProductCard
        }
      }
    }
    collections(first: $allCollections) {
      edges {
        node {
          title
          handle
        }
      }
    }
  }
"#;
