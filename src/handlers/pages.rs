// src/handlers/pages.rs

use axum::response::Html;

const LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Cuestionario - Acceso</title>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
        body { font-family: Arial, sans-serif; max-width: 500px; margin: 50px auto; padding: 20px; }
        .container { border: 1px solid #ddd; padding: 30px; border-radius: 8px; }
        input { width: 100%; padding: 10px; margin: 10px 0; border: 1px solid #ddd; border-radius: 4px; box-sizing: border-box; }
        button { width: 100%; padding: 12px; background: #007bff; color: white; border: none; border-radius: 4px; cursor: pointer; }
        button:hover { background: #0056b3; }
        .error { color: red; margin: 10px 0; }
    </style>
</head>
<body>
    <div class="container">
        <h2>Acceso al Cuestionario</h2>
        <form id="loginForm">
            <input type="text" id="codigo" placeholder="Ingrese su código de acceso" required>
            <button type="submit">Ingresar</button>
            <div id="error" class="error"></div>
        </form>
    </div>

    <script>
    document.getElementById('loginForm').onsubmit = function (e) {
        e.preventDefault();
        const codigo = document.getElementById('codigo').value;

        fetch('/api/login', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ codigo: codigo })
        })
        .then(response => response.json())
        .then(data => {
            if (data.success) {
                localStorage.setItem('token', data.token);
                window.location.href = '/cuestionario';
            } else {
                document.getElementById('error').textContent = data.message;
            }
        })
        .catch(() => {
            document.getElementById('error').textContent = 'Error de conexión';
        });
    };
    </script>
</body>
</html>
"#;

/// GET / - Login page
pub async fn index() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}
