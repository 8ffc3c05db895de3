// src/web/pages.rs
//
// Cascas mínimas das páginas. A apresentação real (templates HTML/JS e
// ficheiros estáticos) vive fora deste backend; estas rotas só garantem que
// os caminhos da referência continuam a responder.
use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html><html><head><title>English SAS</title></head>
<body><h1>English SAS</h1><p><a href="/login">Entrar</a></p></body></html>"#,
    )
}

pub async fn login() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html><html><head><title>English SAS - Login</title></head>
<body><h1>Login</h1><p>Use a API em POST /api/auth/login.</p></body></html>"#,
    )
}

pub async fn dashboard() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html><html><head><title>English SAS - Dashboard</title></head>
<body><h1>Dashboard</h1></body></html>"#,
    )
}
