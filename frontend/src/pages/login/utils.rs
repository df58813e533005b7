use crate::api::ApiError;

pub fn validar_credenciais(email: &str, senha: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::validation("Informe o email."));
    }
    if senha.is_empty() {
        return Err(ApiError::validation("Informe a senha."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_rejected_locally() {
        assert!(validar_credenciais("", "123").is_err());
        assert!(validar_credenciais("  ", "123").is_err());
        assert!(validar_credenciais("joao@empresa.com", "").is_err());
    }

    #[test]
    fn filled_credentials_pass() {
        assert!(validar_credenciais("joao@empresa.com", "123").is_ok());
    }

    #[test]
    fn failure_carries_the_validation_code() {
        let err = validar_credenciais("", "").unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
    }
}
