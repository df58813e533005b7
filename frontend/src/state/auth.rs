use crate::{
    api::{ApiClient, ApiError, LoginRequest, Usuario},
    state::session::Sessao,
};
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub usuario: Option<Usuario>,
    pub autenticado: bool,
    pub carregando: bool,
}

impl AuthState {
    fn com_usuario(usuario: Usuario) -> Self {
        Self {
            usuario: Some(usuario),
            autenticado: true,
            carregando: false,
        }
    }
}

fn create_auth_context(sessao: Sessao) -> AuthContext {
    let inicial = match sessao.carregar() {
        Some(usuario) => AuthState::com_usuario(usuario),
        None => AuthState::default(),
    };
    create_signal(inicial)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let sessao = Sessao;
    let ctx = create_auth_context(sessao);
    provide_context::<AuthContext>(ctx);
    provide_context(sessao);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn use_sessao() -> Sessao {
    use_context::<Sessao>().unwrap_or_default()
}

pub async fn entrar(
    api: &ApiClient,
    sessao: Sessao,
    request: LoginRequest,
    set_auth: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth.update(|state| state.carregando = true);

    match api.login(&request).await {
        Ok(usuario) => {
            if let Err(err) = sessao.salvar(&usuario) {
                log::warn!("não foi possível persistir a sessão: {err}");
            }
            set_auth.set(AuthState::com_usuario(usuario));
            Ok(())
        }
        Err(err) => {
            set_auth.update(|state| state.carregando = false);
            Err(err)
        }
    }
}

/// Logout é local: limpa a sessão persistida e zera o estado.
pub fn sair(sessao: Sessao, set_auth: WriteSignal<AuthState>) {
    sessao.limpar();
    set_auth.set(AuthState::default());
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let sessao = use_sessao();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |request: &LoginRequest| {
        let api = api.clone();
        let payload = request.clone();
        async move { entrar(&api, sessao, payload, set_auth).await }
    })
}
