/*!
# Statements
*/

#[path = "statements/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "statements/for.rs"]
#[allow(non_snake_case)]
pub mod FOR;

#[path = "statements/gosub.rs"]
#[allow(non_snake_case)]
pub mod GOSUB;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/input.rs"]
#[allow(non_snake_case)]
pub mod INPUT;

#[path = "statements/let.rs"]
#[allow(non_snake_case)]
pub mod LET;

#[path = "statements/next.rs"]
#[allow(non_snake_case)]
pub mod NEXT;

#[path = "statements/peek.rs"]
#[allow(non_snake_case)]
pub mod PEEK;

#[path = "statements/poke.rs"]
#[allow(non_snake_case)]
pub mod POKE;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/rem.rs"]
#[allow(non_snake_case)]
pub mod REM;

#[path = "statements/return.rs"]
#[allow(non_snake_case)]
pub mod RETURN;

#[path = "statements/user.rs"]
#[allow(non_snake_case)]
pub mod USER;
