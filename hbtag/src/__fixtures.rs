use crate::Params;

pub(crate) fn quark_params() -> Params {
	Params::new()
		.value("up")
		.value("down")
		.value("strange")
		.value("charm")
}

pub(crate) fn named_params() -> Params {
	Params::new().named("up", "down").named("strange", "charm")
}

pub(crate) fn mixed_params() -> Params {
	quark_params().named("foo", 1).named("bar", 3)
}

pub(crate) fn helper_params() -> Params {
	Params::new()
		.value("up")
		.value("down")
		.named("strange", "charm")
}
