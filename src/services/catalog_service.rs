use crate::config::StorefrontConfig;
use crate::error::AppError;
use crate::models::{Category, HeroSlide, Product, Reel, Session};
use paged_feed::{ItemId, Page, PageRequest, PageResponse, PageSource};
use serde::de::DeserializeOwned;

#[cfg(not(target_arch = "wasm32"))]
const USER_AGENT: &str = "JewelStorefront/0.1.0";

/// Client for the shop's REST API
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    api_base: String,
    session: Session,
}

impl PartialEq for CatalogClient {
    fn eq(&self, other: &Self) -> bool {
        self.api_base == other.api_base && self.session == other.session
    }
}

impl CatalogClient {
    pub fn new(config: &StorefrontConfig, session: Session) -> Result<Self, AppError> {
        Ok(Self {
            http: build_http_client(config)?,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let builder = self
            .http
            .request(method, url)
            .header("Accept", "application/json")
            .header("X-Session-Id", self.session.id.to_string());
        match &self.session.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let url = self.url(path);
        log::debug!("GET {} {:?}", url, query);

        let response = self
            .request(reqwest::Method::GET, &url)
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Http(response.status().as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Decode(format!("{}: {}", url, e)))
    }

    pub async fn fetch_products(&self, request: &PageRequest) -> Result<Page<Product>, AppError> {
        self.get_json::<PageResponse<Product>>("products/", &page_query(request))
            .await
            .map(PageResponse::into_page)
    }

    pub async fn fetch_reels(&self, request: &PageRequest) -> Result<Page<Reel>, AppError> {
        self.get_json::<PageResponse<Reel>>("reels/", &page_query(request))
            .await
            .map(PageResponse::into_page)
    }

    pub async fn fetch_categories(&self) -> Result<Vec<Category>, AppError> {
        self.get_json::<PageResponse<Category>>("categories/", &[])
            .await
            .map(PageResponse::into_items)
    }

    pub async fn fetch_hero_slides(&self) -> Result<Vec<HeroSlide>, AppError> {
        self.get_json::<PageResponse<HeroSlide>>("hero-slides/", &[])
            .await
            .map(PageResponse::into_items)
    }

    /// `POST /{collection}/{id}/{action}/`, e.g. a reel like or view
    pub async fn post_action(
        &self,
        collection: &str,
        id: &ItemId,
        action: &str,
    ) -> Result<(), AppError> {
        let url = self.url(&action_path(collection, id, action));
        log::debug!("POST {}", url);

        let response = self.request(reqwest::Method::POST, &url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::Http(response.status().as_u16()));
        }
        Ok(())
    }

    /// Send an action without waiting for it. Failures are logged only.
    pub fn fire_action(&self, collection: &'static str, id: ItemId, action: &'static str) {
        let client = self.clone();
        dioxus::prelude::spawn(async move {
            if let Err(e) = client.post_action(collection, &id, action).await {
                log::warn!("{} {} on {} failed: {}", action, id, collection, e);
            }
        });
    }
}

impl PageSource<Product> for CatalogClient {
    type Error = AppError;

    async fn fetch_page(&self, request: &PageRequest) -> Result<Page<Product>, AppError> {
        self.fetch_products(request).await
    }
}

impl PageSource<Reel> for CatalogClient {
    type Error = AppError;

    async fn fetch_page(&self, request: &PageRequest) -> Result<Page<Reel>, AppError> {
        self.fetch_reels(request).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(config: &StorefrontConfig) -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .timeout(config.request_timeout())
        .connect_timeout(std::time::Duration::from_secs(10))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| AppError::Network(format!("Client build failed: {}", e)))
}

// The browser owns timeouts and the user agent
#[cfg(target_arch = "wasm32")]
fn build_http_client(_config: &StorefrontConfig) -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .build()
        .map_err(|e| AppError::Network(format!("Client build failed: {}", e)))
}

/// Query parameters for a page request; the filter is omitted for "all"
pub fn page_query(request: &PageRequest) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("page", request.page.to_string()),
        ("page_size", request.page_size.to_string()),
    ];
    if let Some(category) = request.filter.as_query() {
        query.push(("category", category.to_string()));
    }
    query
}

pub fn action_path(collection: &str, id: &ItemId, action: &str) -> String {
    format!("{}/{}/{}/", collection, id, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use paged_feed::FilterKey;

    fn request(filter: FilterKey, page: u32) -> PageRequest {
        PageRequest {
            filter,
            page,
            page_size: 12,
            generation: 0,
        }
    }

    #[test]
    fn test_page_query_all() {
        let q = page_query(&request(FilterKey::All, 2));
        assert_eq!(
            q,
            vec![("page", "2".to_string()), ("page_size", "12".to_string())]
        );
    }

    #[test]
    fn test_page_query_category() {
        let q = page_query(&request(FilterKey::Category("7".into()), 1));
        assert_eq!(q.last(), Some(&("category", "7".to_string())));
    }

    #[test]
    fn test_action_path() {
        assert_eq!(action_path("reels", &ItemId::from("9"), "like"), "reels/9/like/");
    }

    #[test]
    fn test_client_url_join() {
        let mut config = StorefrontConfig::default();
        config.api_base = "https://shop.test/api/".to_string();
        let client = CatalogClient::new(&config, Session::new(None)).unwrap();
        assert_eq!(client.url("/products/"), "https://shop.test/api/products/");
    }
}
