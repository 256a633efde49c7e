//! Constants shared by the storefront loaders and pages.

/// Products per page on a collection listing.
pub const COLLECTION_PAGE_SIZE: u32 = 24;

/// Products shown by the home page and the product slider page.
pub const FEATURED_PRODUCTS_COUNT: u32 = 8;

/// Smart collections shown on the home page.
pub const FEATURED_COLLECTIONS_COUNT: u32 = 3;

/// Collections listed in the collection page's sidebar.
pub const ALL_COLLECTIONS_COUNT: u32 = 100;

/// Field every loader and cart action exposes its analytics under.
pub const ANALYTICS_DATA_KEY: &str = "analytics";

/// Query parameters forwarded verbatim as storefront filters.
pub const KNOWN_FILTER_KEYS: [&str; 2] = ["productVendor", "productType"];
pub const AVAILABLE_FILTER_KEY: &str = "available";
pub const VARIANT_OPTION_FILTER_PREFIX: &str = "variantOption";
pub const MIN_PRICE_KEY: &str = "minPrice";
pub const MAX_PRICE_KEY: &str = "maxPrice";
pub const SORT_KEY: &str = "sort";

pub const CURSOR_KEY: &str = "cursor";
pub const DIRECTION_KEY: &str = "direction";

/// SEO descriptions are cut to this many characters.
pub const SEO_DESCRIPTION_MAX_CHARS: usize = 154;
pub const SEO_DEFAULT_TITLE: &str = "Snowdevil";
pub const SEO_TITLE_TEMPLATE: &str = "%s - A custom Hydrogen storefront";
pub const SEO_DEFAULT_DESCRIPTION: &str =
    "Hydrogen is a React-based framework for building headless storefronts on Shopify.";

pub const DEFAULT_COUNTRY_CODE: &str = "US";
