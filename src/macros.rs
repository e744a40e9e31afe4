// Exposes the backing storage of a struct as its deref target, so the whole
// thing can be viewed as a slice without copying.
macro_rules! impl_deref_mut {
	($($struct_name:ident {$field:ident, $type:ty}),+ $(,)?) => {
		$(
			impl std::ops::Deref for $struct_name {
				type Target = $type;
				fn deref(&self) -> &Self::Target {
					&self.$field
				}
			}

			impl std::ops::DerefMut for $struct_name {
				fn deref_mut(&mut self) -> &mut Self::Target {
			        &mut self.$field
			    }
			}
		)+
	};
}

pub(crate) use impl_deref_mut;
