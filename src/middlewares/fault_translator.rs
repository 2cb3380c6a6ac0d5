//! 결함 변환 미들웨어
//!
//! 앱 전체를 감싸서 처리되지 않은 모든 장애를 [`ErrorDetails`] 응답으로 바꿉니다.
//!
//! - 핸들러나 추출자가 돌려준 `actix_web::Error` (`AppError`, JSON 파싱 실패,
//!   잘못된 경로/쿼리 파라미터 등)
//! - 내부 서비스가 `Err`로 끝난 경우
//! - 패닉
//!
//! 5xx 응답의 원본 메시지와 상세 정보는 개발/테스트 환경에서만 노출됩니다.
//! 환경과 무관하게 모든 장애는 상세 정보와 함께 로그에 남습니다.
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(FaultTranslator::new(config.environment))
//!     .configure(configure_all_routes)
//! ```

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{header, Method, StatusCode};
use actix_web::Error;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use futures_util::FutureExt;

use crate::config::Environment;
use crate::core::errors::{AppError, FaultKind};
use crate::domain::error_details::{ErrorDetails, GENERIC_SERVER_ERROR_MESSAGE};

#[derive(Debug, Clone, Copy)]
pub struct FaultTranslator {
    environment: Environment,
}

impl FaultTranslator {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }
}

impl<S, B> Transform<S, ServiceRequest> for FaultTranslator
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = FaultTranslatorMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(FaultTranslatorMiddleware {
            service: Rc::new(service),
            environment: self.environment,
        }))
    }
}

pub struct FaultTranslatorMiddleware<S> {
    service: Rc<S>,
    environment: Environment,
}

/// 로그에 남길 요청 정보. 라우팅은 `HttpRequest`를 단독으로 소유해야 하므로
/// 내부 서비스 호출 중에는 요청 복제본을 들고 있지 않습니다.
struct RequestLine {
    method: Method,
    path: String,
}

impl<S, B> Service<ServiceRequest> for FaultTranslatorMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let environment = self.environment;
        let line = RequestLine {
            method: req.method().clone(),
            path: req.path().to_string(),
        };

        Box::pin(async move {
            let outcome = AssertUnwindSafe(async move { service.call(req).await })
                .catch_unwind()
                .await;

            // 요청을 되찾을 수 없는 경우는 렌더링한 본문을 에러로 넘기고,
            // 바깥 미들웨어와 디스패처가 응답으로 만듭니다.
            match outcome {
                Ok(Ok(res)) => Ok(translate_response(res, environment)),
                Ok(Err(err)) => Err(Error::from(render_error(&line, &err, environment))),
                Err(panic) => Err(Error::from(render_panic(&line, panic.as_ref(), environment))),
            }
        })
    }
}

/// 에러가 실린 응답만 다시 그리고, 정상 응답과 엔벨로프 실패 응답은 그대로 둡니다.
/// 다시 그린 응답에도 원래 응답의 헤더(CORS, Rate Limiting 등)를 유지합니다.
fn translate_response<B>(
    res: ServiceResponse<B>,
    environment: Environment,
) -> ServiceResponse<EitherBody<B>> {
    let details = match res.response().error() {
        Some(err) => {
            let line = RequestLine {
                method: res.request().method().clone(),
                path: res.request().path().to_string(),
            };
            render_error(&line, err, environment)
        }
        None => return res.map_into_left_body(),
    };

    let original_headers = res.response().headers().clone();
    let mut rebuilt = details.to_response();
    for (name, value) in original_headers.iter() {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            rebuilt.headers_mut().append(name.clone(), value.clone());
        }
    }

    res.into_response(rebuilt).map_into_right_body()
}

fn render_error(line: &RequestLine, err: &Error, environment: Environment) -> ErrorDetails {
    let expose = environment.exposes_internal_errors();

    let details = match (err.as_error::<AppError>(), err.as_error::<ErrorDetails>()) {
        (Some(app_error), _) => ErrorDetails::from_app_error(app_error, expose),
        (None, Some(rendered)) => rendered.clone(),
        (None, None) => {
            let status = err.as_response_error().status_code();
            match (status.is_server_error(), expose) {
                (true, false) => ErrorDetails::for_status(status, GENERIC_SERVER_ERROR_MESSAGE),
                (true, true) => ErrorDetails::for_status(status, err.to_string())
                    .with_stack_trace(format!("{:?}", err)),
                (false, _) => ErrorDetails::for_status(status, err.to_string()),
            }
        }
    };

    if details.status().is_server_error() {
        log::error!("{} {} -> {}: {:?}", line.method, line.path, details.status_code, err);
    } else {
        log::warn!("{} {} -> {}: {}", line.method, line.path, details.status_code, err);
    }

    details
}

fn render_panic(line: &RequestLine, panic: &(dyn Any + Send), environment: Environment) -> ErrorDetails {
    let message = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());

    log::error!("{} {} -> panic: {}", line.method, line.path, message);

    if environment.exposes_internal_errors() {
        ErrorDetails::new(FaultKind::Internal, message.clone())
            .with_stack_trace(format!("panic: {}", message))
    } else {
        ErrorDetails::for_status(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_SERVER_ERROR_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use actix_web::{test, web, App, HttpResponse};

    use super::*;

    async fn broken_store() -> Result<HttpResponse, AppError> {
        Err(AppError::DatabaseError("no such table: productos".to_string()))
    }

    async fn exploding() -> HttpResponse {
        panic!("boom")
    }

    async fn echo(body: web::Json<serde_json::Value>) -> HttpResponse {
        HttpResponse::Ok().json(body.into_inner())
    }

    async fn by_id(id: web::Path<i64>) -> Result<HttpResponse, AppError> {
        Err(AppError::NotFound(format!("No se encontró el producto con ID: {}", id)))
    }

    async fn call(environment: Environment, req: test::TestRequest) -> (StatusCode, ErrorDetails) {
        let app = test::init_service(
            App::new()
                .wrap(FaultTranslator::new(environment))
                .route("/broken", web::get().to(broken_store))
                .route("/panic", web::get().to(exploding))
                .route("/echo", web::post().to(echo))
                .route("/products/{id}", web::get().to(by_id)),
        )
        .await;

        // 패닉은 렌더링된 에러로 전달되므로 디스패처처럼 응답으로 바꿔서 읽습니다.
        let (status, bytes) = match test::try_call_service(&app, req.to_request()).await {
            Ok(res) => (res.status(), test::read_body(res).await),
            Err(err) => {
                let res = err.error_response();
                (res.status(), to_bytes(res.into_body()).await.unwrap())
            }
        };
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_internal_error_is_masked_in_production() {
        let (status, body) =
            call(Environment::Production, test::TestRequest::get().uri("/broken")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, GENERIC_SERVER_ERROR_MESSAGE);
        assert_eq!(body.exception_type, "Server Error");
        assert!(body.stack_trace.is_none());
    }

    #[actix_web::test]
    async fn test_internal_error_is_exposed_in_development() {
        let (status, body) =
            call(Environment::Development, test::TestRequest::get().uri("/broken")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "no such table: productos");
        assert!(body.stack_trace.is_some());
    }

    #[actix_web::test]
    async fn test_panic_becomes_server_error() {
        let (status, body) =
            call(Environment::Production, test::TestRequest::get().uri("/panic")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, GENERIC_SERVER_ERROR_MESSAGE);

        let (_, body) = call(Environment::Test, test::TestRequest::get().uri("/panic")).await;
        assert_eq!(body.message, "boom");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_validation_error() {
        let req = test::TestRequest::post()
            .uri("/echo")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"nombre\": ");
        let (status, body) = call(Environment::Production, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.exception_type, "Validation Error");
    }

    #[actix_web::test]
    async fn test_successful_response_passes_through() {
        let app = test::init_service(
            App::new()
                .wrap(FaultTranslator::new(Environment::Production))
                .route("/echo", web::post().to(echo)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/echo")
            .set_json(serde_json::json!({ "nombre": "Widget" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["nombre"], "Widget");
    }

    #[actix_web::test]
    async fn test_routed_request_reaches_handler() {
        let (status, body) =
            call(Environment::Production, test::TestRequest::get().uri("/products/7")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "No se encontró el producto con ID: 7");
        assert_eq!(body.exception_type, "Not Found");
    }

    #[actix_web::test]
    async fn test_rebuilt_error_keeps_inner_headers() {
        async fn limited() -> Result<HttpResponse, AppError> {
            Err(AppError::ValidationError("El nombre del producto es requerido".to_string()))
        }

        let app = test::init_service(
            App::new()
                .wrap_fn(|req, srv| {
                    let fut = srv.call(req);
                    async move {
                        let mut res = fut.await?;
                        res.headers_mut().insert(
                            header::HeaderName::from_static("x-ratelimit-remaining"),
                            header::HeaderValue::from_static("7"),
                        );
                        Ok(res)
                    }
                })
                .wrap(FaultTranslator::new(Environment::Production))
                .route("/limited", web::get().to(limited)),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/limited").to_request()).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(res.headers().get("x-ratelimit-remaining").unwrap(), "7");
        assert_eq!(res.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
    }
}
