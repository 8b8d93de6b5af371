use educa_core::{ErrorResponse, PaginationMeta, PaginationParams, SortOrder};
use educa_models::{
    CreateStudentDto, CreateUserDto, ForgotPasswordRequest, LoginRequest, MessageResponse,
    PaginatedStudentsResponse, PaginatedUsersResponse, ResetPasswordRequest, SignupRequest,
    Student, TokenResponse, UpdateStudentDto, UpdateUserDto, User,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::signup,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::logout,
        crate::modules::auth::controller::refresh_token,
        crate::modules::auth::controller::forgot_password,
        crate::modules::auth::controller::reset_password,
        crate::modules::auth::controller::protected,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::get_student_by_ra,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
    ),
    components(
        schemas(
            User,
            CreateUserDto,
            UpdateUserDto,
            PaginatedUsersResponse,
            Student,
            CreateStudentDto,
            UpdateStudentDto,
            PaginatedStudentsResponse,
            SignupRequest,
            LoginRequest,
            TokenResponse,
            ForgotPasswordRequest,
            ResetPasswordRequest,
            MessageResponse,
            ErrorResponse,
            PaginationMeta,
            PaginationParams,
            SortOrder,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Sign up, sign in, tokens and password reset"),
        (name = "Users", description = "User management endpoints"),
        (name = "Students", description = "Student records with CPF validation")
    ),
    info(
        title = "Educa API",
        version = "0.1.0",
        description = "Student and user management REST API built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
